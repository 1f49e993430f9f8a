// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Closed-form formulas for MES treatment projections
//!
//! These are pure mathematical functions operating on scalar values.
//! The calculator engines in `science` compose them; nothing here holds state.
//!
//! Units follow the dashboard inputs: flow in m³/day, COD in mg/L, power density
//! in W/m³, money in $, carbon in kg or tonnes CO₂.

use wasm_bindgen::prelude::*;

/// Physical ceiling on COD removal after scenario adjustment (%).
pub const MAX_COD_REMOVAL: f64 = 95.0;
/// Fixed discount rate used for NPV.
pub const DISCOUNT_RATE: f64 = 0.08;
/// Fixed NPV horizon in years.
pub const NPV_HORIZON_YEARS: u32 = 10;
/// Calendar-year scaling, no seasonality.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// kg CO₂e per kg COD removed, used by the COD-proxy carbon estimate.
pub const COD_CARBON_EQUIVALENT: f64 = 1.5;

// ============================================================================
// PERFORMANCE
// ============================================================================

/// Scenario-adjusted COD removal, hard-capped at 95 %.
///
/// `removal_pct * multiplier`, then `min(95)`. No lower clamp: a negative
/// input stays negative.
#[wasm_bindgen]
pub fn capped_cod_removal(removal_pct: f64, multiplier: f64) -> f64 {
    (removal_pct * multiplier).min(MAX_COD_REMOVAL)
}

/// Daily electrical energy recovered
///
/// E = Q · P · 24 / 1000
///
/// # Arguments
/// * `flow_rate` - Treated volume (m³/day)
/// * `power_density` - Volumetric power density (W/m³)
///
/// # Returns
/// kWh/day
#[wasm_bindgen]
pub fn daily_energy_generation(flow_rate: f64, power_density: f64) -> f64 {
    flow_rate * power_density * 24.0 / 1000.0
}

/// COD load removed per day (kg/day)
///
/// m³/day × mg/L = g/day, hence the /1000.
#[wasm_bindgen]
pub fn daily_cod_removed_kg(flow_rate: f64, cod_mg_l: f64, removal_pct: f64) -> f64 {
    flow_rate * cod_mg_l * removal_pct / 100.0 / 1000.0
}

/// COD load removed per year (kg/year)
#[wasm_bindgen]
pub fn annual_cod_removed_kg(flow_rate: f64, cod_mg_l: f64, removal_pct: f64) -> f64 {
    flow_rate * cod_mg_l * removal_pct / 100.0 * DAYS_PER_YEAR / 1000.0
}

// ============================================================================
// INVESTMENT METRICS
// ============================================================================

/// Simple payback period in years.
///
/// Returns `None` when the annual benefit is zero, negative or not finite, or
/// when the period itself is not finite (e.g. a vanishingly small benefit).
#[wasm_bindgen]
pub fn payback_period_years(capital_cost: f64, annual_net_benefit: f64) -> Option<f64> {
    if annual_net_benefit <= 0.0 || !annual_net_benefit.is_finite() {
        return None;
    }
    let years = capital_cost / annual_net_benefit;
    years.is_finite().then_some(years)
}

/// Annual return on investment (%).
///
/// Negative ROI is meaningful and returned as-is. `None` only when there is no
/// positive capital outlay to divide by.
#[wasm_bindgen]
pub fn roi_percent(annual_net_benefit: f64, capital_cost: f64) -> Option<f64> {
    if capital_cost > 0.0 && capital_cost.is_finite() {
        Some(annual_net_benefit / capital_cost * 100.0)
    } else {
        None
    }
}

/// Net present value of a level annual benefit
///
/// NPV = Σ_{t=1..n} B / (1+r)^t − C
#[wasm_bindgen]
pub fn net_present_value(annual_net_benefit: f64, capital_cost: f64, rate: f64, years: u32) -> f64 {
    let discounted: f64 = (1..=years)
        .map(|t| annual_net_benefit / (1.0 + rate).powi(t as i32))
        .sum();
    discounted - capital_cost
}

/// NPV over the fixed 10-year, 8 % horizon used by the economic calculator.
#[wasm_bindgen]
pub fn npv10(annual_net_benefit: f64, capital_cost: f64) -> f64 {
    net_present_value(annual_net_benefit, capital_cost, DISCOUNT_RATE, NPV_HORIZON_YEARS)
}

// ============================================================================
// CARBON ACCOUNTING
// ============================================================================
// The two estimates below answer different questions and are not reconciled.

/// COD-proxy carbon offset (t CO₂/year)
///
/// Treats every kg of COD removed as 1.5 kg CO₂e avoided.
#[wasm_bindgen]
pub fn cod_proxy_carbon_offset_tons(annual_cod_removed_kg: f64) -> f64 {
    annual_cod_removed_kg * COD_CARBON_EQUIVALENT / 1000.0
}

/// Energy-substitution carbon offset (t CO₂/year)
///
/// Grid emissions avoided by not running conventional aeration, minus the
/// emissions attributed to the recovered energy:
///
/// (E_conv · f − |E_gen · f · m|) · 365 / 1000
///
/// # Arguments
/// * `conventional_kwh_day` - Energy a conventional plant would draw
/// * `generated_kwh_day` - Energy recovered by the MES
/// * `grid_factor` - kg CO₂ per kWh
/// * `carbon_multiplier` - Scenario carbon multiplier
#[wasm_bindgen]
pub fn energy_substitution_carbon_offset_tons(
    conventional_kwh_day: f64,
    generated_kwh_day: f64,
    grid_factor: f64,
    carbon_multiplier: f64,
) -> f64 {
    let avoided = conventional_kwh_day * grid_factor;
    let attributed = (generated_kwh_day * grid_factor * carbon_multiplier).abs();
    (avoided - attributed) * DAYS_PER_YEAR / 1000.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- PERFORMANCE TESTS ----

    #[test]
    fn test_removal_cap_engages() {
        // 95 * 1.2 = 114 → capped
        assert_eq!(capped_cod_removal(95.0, 1.2), 95.0);
    }

    #[test]
    fn test_removal_below_cap_passes_through() {
        let result = capped_cod_removal(80.0, 1.1);
        assert!((result - 88.0).abs() < 1e-9, "Expected 88, got {}", result);
    }

    #[test]
    fn test_energy_generation_reference_plant() {
        // 1000 m³/day at 2.5 W/m³ → 60 kWh/day
        assert_eq!(daily_energy_generation(1000.0, 2.5), 60.0);
    }

    #[test]
    fn test_cod_removed_daily_and_annual_agree() {
        let daily = daily_cod_removed_kg(1000.0, 2000.0, 85.0);
        let annual = annual_cod_removed_kg(1000.0, 2000.0, 85.0);
        assert!((daily - 1700.0).abs() < 1e-9, "Expected 1700 kg/day, got {}", daily);
        assert!(
            (annual - daily * DAYS_PER_YEAR).abs() < 1e-6,
            "Annual {} should be 365 × daily {}",
            annual,
            daily
        );
    }

    // ---- INVESTMENT TESTS ----

    #[test]
    fn test_payback_positive_benefit() {
        let result = payback_period_years(800_000.0, 100_000.0);
        assert_eq!(result, Some(8.0));
    }

    #[test]
    fn test_payback_zero_benefit_is_none() {
        assert_eq!(payback_period_years(800_000.0, 0.0), None);
    }

    #[test]
    fn test_payback_negative_benefit_is_none() {
        assert_eq!(payback_period_years(800_000.0, -5_000.0), None);
    }

    #[test]
    fn test_payback_nan_benefit_is_none() {
        assert_eq!(payback_period_years(800_000.0, f64::NAN), None);
    }

    #[test]
    fn test_payback_subnormal_benefit_is_none() {
        // 800 000 / 1e-310 overflows to infinity
        assert_eq!(payback_period_years(800_000.0, 1e-310), None);
        assert_eq!(payback_period_years(800_000.0, f64::INFINITY), None);
    }

    #[test]
    fn test_roi_negative_is_reported() {
        let result = roi_percent(-40_000.0, 800_000.0).unwrap();
        assert!((result + 5.0).abs() < 1e-9, "Expected -5 %, got {}", result);
    }

    #[test]
    fn test_roi_without_capital_is_none() {
        assert_eq!(roi_percent(10_000.0, 0.0), None);
    }

    #[test]
    fn test_npv_single_year() {
        // One year at 8 %: 108 / 1.08 - 50 = 50
        let result = net_present_value(108.0, 50.0, 0.08, 1);
        assert!((result - 50.0).abs() < 1e-9, "Expected 50, got {}", result);
    }

    #[test]
    fn test_npv10_annuity_factor() {
        // 10-year 8 % annuity factor ≈ 6.7101
        let result = npv10(1.0, 0.0);
        assert!((result - 6.710_081).abs() < 1e-5, "Expected ~6.7101, got {}", result);
    }

    // ---- CARBON TESTS ----

    #[test]
    fn test_cod_proxy_offset() {
        // 1000 kg COD → 1.5 t CO₂
        assert_eq!(cod_proxy_carbon_offset_tons(1000.0), 1.5);
    }

    #[test]
    fn test_energy_substitution_offset() {
        // (2100 × 0.45 − 48 × 0.45) × 365 / 1000 = 337.041 t
        let result = energy_substitution_carbon_offset_tons(2100.0, 48.0, 0.45, 1.0);
        assert!((result - 337.041).abs() < 1e-6, "Expected 337.041, got {}", result);
    }

    #[test]
    fn test_energy_substitution_can_go_negative() {
        let result = energy_substitution_carbon_offset_tons(10.0, 100.0, 0.5, 1.0);
        assert!(result < 0.0, "Expected negative offset, got {}", result);
    }
}
