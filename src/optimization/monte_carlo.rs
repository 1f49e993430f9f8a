// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Monte Carlo sensitivity analysis for the projection model
//!
//! Perturbs every operating input around its baseline and summarizes how
//! the headline outputs spread. Seeded, so a given seed always reproduces
//! the same bands.

use crate::error::{error_json, CoreResult, ProjectionError};
use crate::science::economics::EconomicEngine;
use crate::science::inputs::OperatingInputs;
use crate::science::scenario::Scenario;
use crate::science::sustainability::{SustainabilityEngine, DEFAULT_CARBON_CREDIT_PRICE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Spread of one output across the samples.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Band {
    pub min: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
    pub max: f64,
    pub mean: f64,
}

impl Band {
    /// Nearest-rank percentiles over `values`, which must be non-empty.
    fn from_samples(mut values: Vec<f64>) -> Band {
        values.sort_by(|a, b| a.total_cmp(b));
        let n = values.len();
        let at = |p: f64| values[((n - 1) as f64 * p).round() as usize];
        Band {
            min: values[0],
            p10: at(0.1),
            p50: at(0.5),
            p90: at(0.9),
            max: values[n - 1],
            mean: values.iter().sum::<f64>() / n as f64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityReport {
    pub scenario: Scenario,
    pub samples: usize,
    pub variance: f64,
    pub seed: u64,
    pub annual_net_benefit: Band,
    pub npv10: Band,
    /// COD-proxy estimate, t CO₂/year
    pub cod_proxy_carbon_offset: Band,
    /// Energy-substitution estimate, t CO₂/year
    pub energy_substitution_carbon_offset: Band,
    /// Share of samples that pay back at all
    pub payback_defined_fraction: f64,
}

#[wasm_bindgen]
pub struct SensitivityAnalyzer;

#[wasm_bindgen]
impl SensitivityAnalyzer {
    /// Run the analysis and return the report as JSON.
    ///
    /// Args:
    /// - samples: number of perturbed input sets
    /// - variance: total relative width, 0.3 gives factors in [0.85, 1.15)
    /// - seed: RNG seed
    pub fn run_json(
        inputs: &OperatingInputs,
        scenario: Scenario,
        samples: usize,
        variance: f64,
        seed: u64,
    ) -> String {
        match Self::run(inputs, scenario, samples, variance, seed) {
            Ok(report) => serde_json::to_string(&report).unwrap_or_default(),
            Err(e) => error_json(&e),
        }
    }
}

impl SensitivityAnalyzer {
    pub fn run(
        inputs: &OperatingInputs,
        scenario: Scenario,
        samples: usize,
        variance: f64,
        seed: u64,
    ) -> CoreResult<SensitivityReport> {
        if samples == 0 {
            return Err(ProjectionError::InvalidSensitivity(
                "samples must be at least 1".to_string(),
            ));
        }
        if !variance.is_finite() || variance < 0.0 {
            return Err(ProjectionError::InvalidSensitivity(format!(
                "variance must be finite and non-negative, got {}",
                variance
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = Vec::with_capacity(samples);
        let mut npv = Vec::with_capacity(samples);
        let mut cod_carbon = Vec::with_capacity(samples);
        let mut energy_carbon = Vec::with_capacity(samples);
        let mut paid_back = 0usize;

        for _ in 0..samples {
            // Perturb every field independently
            let trial = inputs.map_fields(|_, value| {
                let r: f64 = rng.gen();
                let factor = 1.0 + (r - 0.5) * variance;
                (value * factor).max(0.0)
            });

            let eco = EconomicEngine::project(&trial, scenario);
            let sus = SustainabilityEngine::project(&trial, scenario, DEFAULT_CARBON_CREDIT_PRICE);

            net.push(eco.annual.net_benefit);
            npv.push(eco.economics.npv10);
            cod_carbon.push(eco.annual.carbon_offset);
            energy_carbon.push(sus.annual.carbon_offset);
            if eco.economics.payback_period_years.is_some() {
                paid_back += 1;
            }
        }

        debug!(samples, variance, seed, scenario = scenario.as_str(), "sensitivity run");

        Ok(SensitivityReport {
            scenario,
            samples,
            variance,
            seed,
            annual_net_benefit: Band::from_samples(net),
            npv10: Band::from_samples(npv),
            cod_proxy_carbon_offset: Band::from_samples(cod_carbon),
            energy_substitution_carbon_offset: Band::from_samples(energy_carbon),
            payback_defined_fraction: paid_back as f64 / samples as f64,
        })
    }
}
