// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas;
use crate::science::inputs::OperatingInputs;
use crate::science::scenario::Scenario;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Market price assumed for carbon credits ($/t CO₂).
pub const DEFAULT_CARBON_CREDIT_PRICE: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySustainability {
    pub volume: f64,              // m³/day
    pub energy_generation: f64,   // kWh/day
    pub cod_removed: f64,         // kg/day
    pub conventional_energy: f64, // kWh/day a conventional plant would draw
    pub energy_savings: f64,      // kWh/day
    pub carbon_from_energy: f64,  // kg CO₂/day
    pub carbon_avoided: f64,      // kg CO₂/day
    pub carbon_benefit: f64,      // kg CO₂/day, net
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSustainability {
    pub energy_generation: f64, // kWh/year
    pub cod_removed: f64,       // kg/year
    pub energy_savings: f64,    // kWh/year
    pub carbon_benefit: f64,    // kg CO₂/year
    /// Energy-substitution estimate, t CO₂/year
    pub carbon_offset: f64,
    pub energy_value: f64,        // $/year
    pub carbon_credit_value: f64, // $/year
    pub total_value: f64,         // $/year
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityPerformance {
    pub adjusted_power_density: f64,
    /// Percent; not capped, so an optimistic scenario may exceed 100
    pub adjusted_cod_removal: f64,
}

/// Output of the sustainability calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityProjection {
    pub daily: DailySustainability,
    pub annual: AnnualSustainability,
    pub performance: SustainabilityPerformance,
}

#[wasm_bindgen]
pub struct SustainabilityEngine;

#[wasm_bindgen]
impl SustainabilityEngine {
    /// Project the sustainability calculator at the default credit price, as JSON.
    pub fn project_json(inputs: &OperatingInputs, scenario: Scenario) -> String {
        let projection = Self::project(inputs, scenario, DEFAULT_CARBON_CREDIT_PRICE);
        serde_json::to_string(&projection).unwrap_or_default()
    }
}

impl SustainabilityEngine {
    /// Environmental projection with the energy-substitution carbon estimate.
    ///
    /// Carbon benefit is grid emissions avoided by replacing conventional
    /// aeration energy, minus emissions attributed to the recovered energy.
    /// This is not the COD-proxy figure of the economic calculator and the two
    /// are not expected to agree. Unlike the economic calculator, COD removal
    /// is scaled by the efficiency multiplier without the 95 % cap.
    pub fn project(
        inputs: &OperatingInputs,
        scenario: Scenario,
        carbon_credit_price: f64,
    ) -> SustainabilityProjection {
        let m = scenario.sustainability_multipliers();
        let days = formulas::DAYS_PER_YEAR;

        let adj_power_density = inputs.power_density * m.power;
        let adj_cod_removal = inputs.cod_removal * m.efficiency;

        let volume = inputs.flow_rate;
        let energy_generation = formulas::daily_energy_generation(volume, adj_power_density);
        let cod_removed =
            formulas::daily_cod_removed_kg(volume, inputs.cod_concentration, adj_cod_removal);
        let conventional_energy = volume * inputs.conventional_energy_intensity;
        let energy_savings = conventional_energy - energy_generation.abs();

        let carbon_from_energy = energy_generation * inputs.carbon_factor * m.carbon;
        let carbon_avoided = conventional_energy * inputs.carbon_factor;
        let carbon_benefit = carbon_avoided - carbon_from_energy.abs();

        let annual_generation = energy_generation * days;
        let carbon_offset = formulas::energy_substitution_carbon_offset_tons(
            conventional_energy,
            energy_generation,
            inputs.carbon_factor,
            m.carbon,
        );
        let energy_value = annual_generation * inputs.electricity_rate;
        let carbon_credit_value =
            carbon_offset * carbon_credit_price * scenario.carbon_credit_factor();

        SustainabilityProjection {
            daily: DailySustainability {
                volume,
                energy_generation,
                cod_removed,
                conventional_energy,
                energy_savings,
                carbon_from_energy,
                carbon_avoided,
                carbon_benefit,
            },
            annual: AnnualSustainability {
                energy_generation: annual_generation,
                cod_removed: cod_removed * days,
                energy_savings: energy_savings * days,
                carbon_benefit: carbon_benefit * days,
                carbon_offset,
                energy_value,
                carbon_credit_value,
                total_value: energy_value + carbon_credit_value,
            },
            performance: SustainabilityPerformance {
                adjusted_power_density: adj_power_density,
                adjusted_cod_removal: adj_cod_removal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::inputs::Calculator;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn baseline() -> SustainabilityProjection {
        SustainabilityEngine::project(
            &OperatingInputs::defaults_for(Calculator::Sustainability),
            Scenario::Realistic,
            DEFAULT_CARBON_CREDIT_PRICE,
        )
    }

    #[test]
    fn test_baseline_daily_balance() {
        let p = baseline();
        // 1000 m³/day × 2.0 W/m³ × 24 / 1000
        assert_eq!(p.daily.energy_generation, 48.0);
        assert!(close(p.daily.cod_removed, 1700.0, 1e-9));
        assert!(close(p.daily.conventional_energy, 2100.0, 1e-9));
        assert!(close(p.daily.energy_savings, 2052.0, 1e-9));
        assert!(close(p.daily.carbon_from_energy, 21.6, 1e-9));
        assert!(close(p.daily.carbon_avoided, 945.0, 1e-9));
        assert!(close(p.daily.carbon_benefit, 923.4, 1e-9));
    }

    #[test]
    fn test_baseline_annual_valuation() {
        let p = baseline();
        assert!(close(p.annual.carbon_offset, 337.041, 1e-6), "{}", p.annual.carbon_offset);
        assert!(
            close(p.annual.carbon_offset, p.annual.carbon_benefit / 1000.0, 1e-9),
            "Offset must be the annual benefit in tonnes"
        );
        assert!(close(p.annual.energy_value, 2102.4, 1e-6));
        assert!(close(p.annual.carbon_credit_value, 16_852.05, 1e-6));
        assert!(close(p.annual.total_value, 18_954.45, 1e-6));
    }

    #[test]
    fn test_credit_factor_follows_scenario() {
        let inputs = OperatingInputs::defaults_for(Calculator::Sustainability);
        let opt = SustainabilityEngine::project(&inputs, Scenario::Optimistic, 50.0);
        let expected = opt.annual.carbon_offset * 50.0 * 1.5;
        assert!(close(opt.annual.carbon_credit_value, expected, 1e-9));
    }

    #[test]
    fn test_efficiency_scales_removal_without_cap() {
        let inputs = OperatingInputs::defaults_for(Calculator::Sustainability);
        let p = SustainabilityEngine::project(&inputs, Scenario::Optimistic, 50.0);
        // 85 × 1.2 = 102 %, passed through
        assert!(close(p.performance.adjusted_cod_removal, 102.0, 1e-9));
        // 1000 m³ × 2000 mg/L × 102 % = 2040 kg/day
        assert!(
            close(p.daily.cod_removed, 2040.0, 1e-9),
            "Expected 2040 kg/day, got {}",
            p.daily.cod_removed
        );
        assert!(close(p.annual.cod_removed, 2040.0 * 365.0, 1e-6));
    }

    #[test]
    fn test_generation_exceeding_conventional_goes_negative() {
        let inputs = OperatingInputs {
            power_density: 5.0,
            conventional_energy_intensity: 0.05,
            ..OperatingInputs::defaults_for(Calculator::Sustainability)
        };
        let p = SustainabilityEngine::project(&inputs, Scenario::Optimistic, 50.0);
        assert!(p.daily.energy_savings < 0.0);
        assert!(p.annual.carbon_offset < 0.0);
        assert!(p.annual.carbon_credit_value < 0.0);
    }

    #[test]
    fn test_carbon_accounting_differs_from_cod_proxy() {
        let inputs = OperatingInputs::defaults_for(Calculator::Sustainability);
        let eco = crate::science::economics::EconomicEngine::project(&inputs, Scenario::Realistic);
        let sus = SustainabilityEngine::project(&inputs, Scenario::Realistic, 50.0);
        assert!(
            (eco.annual.carbon_offset - sus.annual.carbon_offset).abs() > 1.0,
            "The two carbon estimates are independent metrics"
        );
    }
}
