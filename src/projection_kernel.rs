// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// ProjectionKernel: single entry point for both calculators
//
// This file is part of the MES impact dashboard core.
// For licensing terms, see the LICENSE file in the project root.

// ============================================================================
// ProjectionKernel
// ============================================================================
// The frontend calls this module rather than the individual engines. It runs
// the enabled calculators for one scenario and attaches advisory events.
// ============================================================================

use crate::error::{error_json, CoreResult};
use crate::safety::InputGuard;
use crate::science::{
    economics::{EconomicEngine, EconomicProjection},
    inputs::{Calculator, InputField, OperatingInputs},
    scenario::Scenario,
    sustainability::{SustainabilityEngine, SustainabilityProjection, DEFAULT_CARBON_CREDIT_PRICE},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub enable_economics: bool,
    pub enable_sustainability: bool,
    /// $/t CO₂ used to value the energy-substitution offset.
    pub carbon_credit_price: f64,
    /// Emit `INPUT.RANGE` events for values outside the dashboard sliders.
    pub check_input_ranges: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            enable_economics: true,
            enable_sustainability: true,
            carbon_credit_price: DEFAULT_CARBON_CREDIT_PRICE,
            check_input_ranges: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, message: String, severity: Severity) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub scenario: Scenario,
    pub economic: Option<EconomicProjection>,
    pub sustainability: Option<SustainabilityProjection>,
}

#[derive(Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub result: ProjectionResult,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f64,
}

/// Document accepted by the CLI: `{ "inputs": {...}, "scenario": "...", "config": {...} }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionRequest {
    pub inputs: OperatingInputs,
    pub scenario: Scenario,
    pub config: ProjectionConfig,
}

impl ProjectionRequest {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[wasm_bindgen]
pub struct ProjectionKernel;

#[wasm_bindgen]
impl ProjectionKernel {
    /// Main entry point for the dashboard.
    ///
    /// # Arguments
    /// * `inputs_json` - `OperatingInputs` object; absent fields keep their defaults
    /// * `scenario` - `"optimistic"`, `"realistic"` or `"conservative"`
    ///
    /// # Returns
    /// `{ result, events, compute_time_ms }` with the default config, or
    /// `{ "error": ... }` when the JSON or scenario name is invalid.
    pub fn compute_json(inputs_json: &str, scenario: &str) -> String {
        let parsed = OperatingInputs::from_json(inputs_json)
            .and_then(|inputs| Ok((inputs, scenario.parse::<Scenario>()?)));
        let (inputs, scenario) = match parsed {
            Ok(v) => v,
            Err(e) => return error_json(&e),
        };

        let response = Self::respond(&inputs, scenario, &ProjectionConfig::default());
        serde_json::to_string(&response).unwrap_or_default()
    }

    /// All three scenarios for one input set, as a JSON array of responses.
    pub fn compare_json(inputs_json: &str) -> String {
        let inputs = match OperatingInputs::from_json(inputs_json) {
            Ok(i) => i,
            Err(e) => return error_json(&e),
        };
        let config = ProjectionConfig::default();
        let responses: Vec<ProjectionResponse> = Scenario::ALL
            .iter()
            .map(|s| Self::respond(&inputs, *s, &config))
            .collect();
        serde_json::to_string(&responses).unwrap_or_default()
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl ProjectionKernel {
    /// Run the enabled calculators. Pure; events are produced by `respond`.
    pub fn compute(
        inputs: &OperatingInputs,
        scenario: Scenario,
        config: &ProjectionConfig,
    ) -> ProjectionResult {
        let economic = config
            .enable_economics
            .then(|| EconomicEngine::project(inputs, scenario));
        let sustainability = config
            .enable_sustainability
            .then(|| SustainabilityEngine::project(inputs, scenario, config.carbon_credit_price));

        ProjectionResult {
            scenario,
            economic,
            sustainability,
        }
    }

    /// Results for every scenario, optimistic first.
    pub fn compare_scenarios(
        inputs: &OperatingInputs,
        config: &ProjectionConfig,
    ) -> Vec<ProjectionResult> {
        Scenario::ALL
            .iter()
            .map(|s| Self::compute(inputs, *s, config))
            .collect()
    }

    /// Compute, time it, and attach validation events.
    pub fn respond(
        inputs: &OperatingInputs,
        scenario: Scenario,
        config: &ProjectionConfig,
    ) -> ProjectionResponse {
        let start = instant::Instant::now();
        let result = Self::compute(inputs, scenario, config);
        let events = Self::validate(inputs, &result, config);
        let compute_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            scenario = scenario.as_str(),
            events = events.len(),
            compute_time_ms,
            "projection computed"
        );

        ProjectionResponse {
            result,
            events,
            compute_time_ms,
        }
    }

    /// Parse and answer a CLI request document.
    pub fn respond_to(request_json: &str) -> CoreResult<ProjectionResponse> {
        let request = ProjectionRequest::from_json(request_json)?;
        Ok(Self::respond(&request.inputs, request.scenario, &request.config))
    }

    /// Advisory checks. Never alters the numbers.
    pub fn validate(
        inputs: &OperatingInputs,
        result: &ProjectionResult,
        config: &ProjectionConfig,
    ) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        if let Some(eco) = &result.economic {
            if eco.economics.payback_period_years.is_none() {
                events.push(ValidationEvent::new(
                    "ECONOMICS.PAYBACK",
                    format!(
                        "No payback: annual net benefit ${:.0} never recovers ${:.0} capital",
                        eco.annual.net_benefit, eco.economics.capital_cost
                    ),
                    Severity::Critical,
                ));
            }
            if eco.daily.net_benefit < 0.0 {
                events.push(ValidationEvent::new(
                    "ECONOMICS.NET_BENEFIT",
                    format!("Negative daily net benefit: ${:.2}/day", eco.daily.net_benefit),
                    Severity::Warning,
                ));
            }
            if eco.performance.removal_capped {
                events.push(ValidationEvent::new(
                    "PERFORMANCE.REMOVAL_CAP",
                    format!(
                        "COD removal capped at {:.0} % ({} scenario)",
                        eco.performance.adjusted_cod_removal,
                        result.scenario
                    ),
                    Severity::Info,
                ));
            }
        }

        if let Some(sus) = &result.sustainability {
            if sus.annual.carbon_offset < 0.0 {
                events.push(ValidationEvent::new(
                    "ENVIRONMENT.CARBON",
                    format!(
                        "Net carbon emitter: {:.1} t CO₂/year",
                        sus.annual.carbon_offset
                    ),
                    Severity::Warning,
                ));
            }
        }

        if config.check_input_ranges {
            let calculators = [
                (config.enable_economics, Calculator::Economic),
                (config.enable_sustainability, Calculator::Sustainability),
            ];
            // Shared ranges and finiteness failures would repeat per calculator
            let mut seen: Vec<(InputField, String)> = Vec::new();
            for (_, calculator) in calculators.iter().filter(|(enabled, _)| *enabled) {
                for v in InputGuard::check(inputs, *calculator).violations {
                    if seen.iter().any(|(f, r)| *f == v.field && *r == v.reason) {
                        continue;
                    }
                    events.push(ValidationEvent::new(
                        "INPUT.RANGE",
                        format!("{}: {}", v.field.label(), v.reason),
                        Severity::Warning,
                    ));
                    seen.push((v.field, v.reason));
                }
            }
        }

        for e in events.iter().filter(|e| e.severity == Severity::Critical) {
            warn!(topic = %e.topic, "{}", e.message);
        }

        events
    }
}
