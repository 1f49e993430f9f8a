// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::error::ProjectionError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Assumption set applied multiplicatively to the baseline inputs.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Optimistic = 0,
    Realistic = 1,
    Conservative = 2,
}

/// Economic calculator multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EconomicMultipliers {
    pub power: f64,
    /// Applied to operating cost
    pub cost: f64,
    pub removal: f64,
}

/// Sustainability calculator multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SustainabilityMultipliers {
    pub power: f64,
    /// Applied to COD removal
    pub efficiency: f64,
    /// Applied to emissions attributed to recovered energy
    pub carbon: f64,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Optimistic,
        Scenario::Realistic,
        Scenario::Conservative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Optimistic => "optimistic",
            Scenario::Realistic => "realistic",
            Scenario::Conservative => "conservative",
        }
    }

    pub fn economic_multipliers(&self) -> EconomicMultipliers {
        match self {
            Scenario::Optimistic => EconomicMultipliers {
                power: 1.3,
                cost: 0.8,
                removal: 1.1,
            },
            Scenario::Realistic => EconomicMultipliers {
                power: 1.0,
                cost: 1.0,
                removal: 1.0,
            },
            Scenario::Conservative => EconomicMultipliers {
                power: 0.7,
                cost: 1.2,
                removal: 0.9,
            },
        }
    }

    pub fn sustainability_multipliers(&self) -> SustainabilityMultipliers {
        match self {
            Scenario::Optimistic => SustainabilityMultipliers {
                power: 1.4,
                efficiency: 1.2,
                carbon: 1.3,
            },
            Scenario::Realistic => SustainabilityMultipliers {
                power: 1.0,
                efficiency: 1.0,
                carbon: 1.0,
            },
            Scenario::Conservative => SustainabilityMultipliers {
                power: 0.7,
                efficiency: 0.8,
                carbon: 0.8,
            },
        }
    }

    /// Scales the carbon credit price in the sustainability valuation.
    pub fn carbon_credit_factor(&self) -> f64 {
        match self {
            Scenario::Optimistic => 1.5,
            Scenario::Realistic => 1.0,
            Scenario::Conservative => 0.7,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Realistic
    }
}

impl FromStr for Scenario {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimistic" => Ok(Scenario::Optimistic),
            "realistic" => Ok(Scenario::Realistic),
            "conservative" => Ok(Scenario::Conservative),
            _ => Err(ProjectionError::UnknownScenario(s.to_string())),
        }
    }
}

// Same names as `FromStr`, so request documents accept "Optimistic" too
impl<'de> Deserialize<'de> for Scenario {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
