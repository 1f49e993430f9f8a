// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// Operating inputs and the slider ranges that bound them

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Which dashboard calculator an input set is driven by.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calculator {
    Economic = 0,
    Sustainability = 1,
}

/// Scalar parameters of a hypothetical treatment facility.
///
/// Held in UI state and edited in place by sliders; never persisted.
/// Missing JSON fields fall back to the economic calculator defaults.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatingInputs {
    /// m³/day
    pub flow_rate: f64,
    /// mg/L
    pub cod_concentration: f64,
    /// W/m³
    pub power_density: f64,
    /// Percent, 0-100
    #[serde(rename = "codRemovalFraction", alias = "codRemoval")]
    pub cod_removal: f64,
    /// $/kWh
    pub electricity_rate: f64,
    /// $/m³
    pub operating_cost: f64,
    /// $/m³ of daily capacity
    pub capital_cost: f64,
    /// $/m³
    #[serde(alias = "conventionalCost")]
    pub conventional_treatment_cost: f64,
    /// kg CO₂/kWh
    pub carbon_factor: f64,
    /// kWh/m³
    #[serde(alias = "conventionalEnergy")]
    pub conventional_energy_intensity: f64,
}

impl Default for OperatingInputs {
    fn default() -> Self {
        Self {
            flow_rate: 1000.0,
            cod_concentration: 2000.0,
            power_density: 2.5,
            cod_removal: 85.0,
            electricity_rate: 0.12,
            operating_cost: 0.15,
            capital_cost: 800.0,
            conventional_treatment_cost: 0.45,
            carbon_factor: 0.45,
            conventional_energy_intensity: 2.1,
        }
    }
}

#[wasm_bindgen]
impl OperatingInputs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> OperatingInputs {
        OperatingInputs::default()
    }

    /// Starting point for a given calculator. The sustainability calculator
    /// opens with a more modest 2.0 W/m³.
    pub fn defaults_for(calculator: Calculator) -> OperatingInputs {
        match calculator {
            Calculator::Economic => OperatingInputs::default(),
            Calculator::Sustainability => OperatingInputs {
                power_density: 2.0,
                ..OperatingInputs::default()
            },
        }
    }

    /// Slider edit. Mutates in place, no clamping.
    pub fn set_field(&mut self, field: InputField, value: f64) {
        match field {
            InputField::FlowRate => self.flow_rate = value,
            InputField::CodConcentration => self.cod_concentration = value,
            InputField::PowerDensity => self.power_density = value,
            InputField::CodRemoval => self.cod_removal = value,
            InputField::ElectricityRate => self.electricity_rate = value,
            InputField::OperatingCost => self.operating_cost = value,
            InputField::CapitalCost => self.capital_cost = value,
            InputField::ConventionalTreatmentCost => self.conventional_treatment_cost = value,
            InputField::CarbonFactor => self.carbon_factor = value,
            InputField::ConventionalEnergyIntensity => self.conventional_energy_intensity = value,
        }
    }

    pub fn get_field(&self, field: InputField) -> f64 {
        match field {
            InputField::FlowRate => self.flow_rate,
            InputField::CodConcentration => self.cod_concentration,
            InputField::PowerDensity => self.power_density,
            InputField::CodRemoval => self.cod_removal,
            InputField::ElectricityRate => self.electricity_rate,
            InputField::OperatingCost => self.operating_cost,
            InputField::CapitalCost => self.capital_cost,
            InputField::ConventionalTreatmentCost => self.conventional_treatment_cost,
            InputField::CarbonFactor => self.carbon_factor,
            InputField::ConventionalEnergyIntensity => self.conventional_energy_intensity,
        }
    }
}

/// Pure Rust helpers (non-WASM)
impl OperatingInputs {
    /// Parse a JSON object; absent fields keep their defaults.
    pub fn from_json(json: &str) -> CoreResult<OperatingInputs> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `f` to every field, used by perturbation sampling.
    pub fn map_fields(&self, mut f: impl FnMut(InputField, f64) -> f64) -> OperatingInputs {
        let mut out = *self;
        for field in InputField::ALL {
            out.set_field(field, f(field, self.get_field(field)));
        }
        out
    }
}

/// Identifies one slider-controlled input.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    FlowRate = 0,
    CodConcentration = 1,
    PowerDensity = 2,
    CodRemoval = 3,
    ElectricityRate = 4,
    OperatingCost = 5,
    CapitalCost = 6,
    ConventionalTreatmentCost = 7,
    CarbonFactor = 8,
    ConventionalEnergyIntensity = 9,
}

impl InputField {
    pub const ALL: [InputField; 10] = [
        InputField::FlowRate,
        InputField::CodConcentration,
        InputField::PowerDensity,
        InputField::CodRemoval,
        InputField::ElectricityRate,
        InputField::OperatingCost,
        InputField::CapitalCost,
        InputField::ConventionalTreatmentCost,
        InputField::CarbonFactor,
        InputField::ConventionalEnergyIntensity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::FlowRate => "Flow Rate",
            InputField::CodConcentration => "COD Concentration",
            InputField::PowerDensity => "Power Density",
            InputField::CodRemoval => "COD Removal",
            InputField::ElectricityRate => "Electricity Rate",
            InputField::OperatingCost => "Operating Cost",
            InputField::CapitalCost => "Capital Cost",
            InputField::ConventionalTreatmentCost => "Conventional Treatment",
            InputField::CarbonFactor => "Grid Carbon Factor",
            InputField::ConventionalEnergyIntensity => "Conventional Energy",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputField::FlowRate => "m³/day",
            InputField::CodConcentration => "mg/L",
            InputField::PowerDensity => "W/m³",
            InputField::CodRemoval => "%",
            InputField::ElectricityRate => "$/kWh",
            InputField::OperatingCost => "$/m³",
            InputField::CapitalCost => "$/m³ capacity",
            InputField::ConventionalTreatmentCost => "$/m³",
            InputField::CarbonFactor => "kg CO₂/kWh",
            InputField::ConventionalEnergyIntensity => "kWh/m³",
        }
    }

    /// Slider bounds for this field on the given calculator, or `None` when
    /// that calculator does not expose the field.
    pub fn range(&self, calculator: Calculator) -> Option<InputRange> {
        use Calculator::*;
        use InputField::*;
        let r = |min, max, step| Some(InputRange { min, max, step });
        match (self, calculator) {
            (FlowRate, Economic) => r(10.0, 10_000.0, 10.0),
            (FlowRate, Sustainability) => r(100.0, 10_000.0, 100.0),
            (CodConcentration, _) => r(500.0, 5000.0, 100.0),
            (PowerDensity, _) => r(0.5, 5.0, 0.1),
            (CodRemoval, _) => r(60.0, 95.0, 1.0),
            (ElectricityRate, _) => r(0.05, 0.3, 0.01),
            (OperatingCost, Economic) => r(0.05, 0.5, 0.01),
            (CapitalCost, Economic) => r(400.0, 2000.0, 50.0),
            (ConventionalTreatmentCost, Economic) => r(0.2, 1.0, 0.05),
            (CarbonFactor, Sustainability) => r(0.1, 0.8, 0.01),
            (ConventionalEnergyIntensity, Sustainability) => r(1.0, 3.0, 0.1),
            _ => None,
        }
    }
}

/// `[min, max, step]` of a slider.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[wasm_bindgen]
impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
