// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas;
use crate::science::inputs::OperatingInputs;
use crate::science::scenario::Scenario;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEconomics {
    pub volume: f64,           // m³/day
    pub power_generation: f64, // kWh/day
    pub energy_revenue: f64,   // $/day
    pub operating_cost: f64,   // $/day
    pub treatment_savings: f64,
    pub net_benefit: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualEconomics {
    pub net_benefit: f64, // $/year
    pub cod_removed: f64, // kg COD/year
    /// COD-proxy estimate, t CO₂/year
    pub carbon_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentMetrics {
    pub capital_cost: f64,
    /// `null` when the plant never pays back (annual net benefit ≤ 0)
    pub payback_period_years: Option<f64>,
    /// `null` when there is no capital outlay
    pub roi_percent: Option<f64>,
    pub npv10: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicPerformance {
    pub adjusted_power_density: f64,
    pub adjusted_operating_cost: f64,
    pub adjusted_cod_removal: f64,
    pub removal_capped: bool,
}

/// Output of the economic calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicProjection {
    pub daily: DailyEconomics,
    pub annual: AnnualEconomics,
    pub economics: InvestmentMetrics,
    pub performance: EconomicPerformance,
}

#[wasm_bindgen]
pub struct EconomicEngine;

#[wasm_bindgen]
impl EconomicEngine {
    /// Project the economic calculator and return it as JSON.
    pub fn project_json(inputs: &OperatingInputs, scenario: Scenario) -> String {
        serde_json::to_string(&Self::project(inputs, scenario)).unwrap_or_default()
    }
}

impl EconomicEngine {
    /// Financial projection with the COD-proxy carbon estimate.
    ///
    /// Scenario multipliers are applied first, then every derived value is
    /// recomputed from scratch. Inputs are taken as given; only COD removal is
    /// capped.
    pub fn project(inputs: &OperatingInputs, scenario: Scenario) -> EconomicProjection {
        let m = scenario.economic_multipliers();

        let adj_power_density = inputs.power_density * m.power;
        let adj_operating_cost = inputs.operating_cost * m.cost;
        let adj_cod_removal = formulas::capped_cod_removal(inputs.cod_removal, m.removal);

        // Daily
        let volume = inputs.flow_rate;
        let power_generation = formulas::daily_energy_generation(volume, adj_power_density);
        let energy_revenue = power_generation * inputs.electricity_rate;
        let operating_cost = volume * adj_operating_cost;
        let treatment_savings =
            volume * (inputs.conventional_treatment_cost - adj_operating_cost);
        let daily_net = energy_revenue + treatment_savings - operating_cost;

        // Annual
        let annual_net = daily_net * formulas::DAYS_PER_YEAR;
        let capital_cost = inputs.flow_rate * inputs.capital_cost;
        let cod_removed =
            formulas::annual_cod_removed_kg(volume, inputs.cod_concentration, adj_cod_removal);

        EconomicProjection {
            daily: DailyEconomics {
                volume,
                power_generation,
                energy_revenue,
                operating_cost,
                treatment_savings,
                net_benefit: daily_net,
            },
            annual: AnnualEconomics {
                net_benefit: annual_net,
                cod_removed,
                carbon_offset: formulas::cod_proxy_carbon_offset_tons(cod_removed),
            },
            economics: InvestmentMetrics {
                capital_cost,
                payback_period_years: formulas::payback_period_years(capital_cost, annual_net),
                roi_percent: formulas::roi_percent(annual_net, capital_cost),
                npv10: formulas::npv10(annual_net, capital_cost),
            },
            performance: EconomicPerformance {
                adjusted_power_density: adj_power_density,
                adjusted_operating_cost: adj_operating_cost,
                adjusted_cod_removal: adj_cod_removal,
                removal_capped: inputs.cod_removal * m.removal > formulas::MAX_COD_REMOVAL,
            },
        }
    }
}
