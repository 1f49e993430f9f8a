// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::science::inputs::{Calculator, InputField, OperatingInputs};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeViolation {
    pub field: InputField,
    pub value: f64,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub allowed: bool,
    pub violations: Vec<RangeViolation>,
}

/// Advisory check of inputs against the dashboard sliders.
///
/// The projection model never calls this; it computes whatever it is given.
/// The guard lets a caller flag values a slider could not have produced.
#[wasm_bindgen]
pub struct InputGuard;

#[wasm_bindgen]
impl InputGuard {
    pub fn check_json(inputs: &OperatingInputs, calculator: Calculator) -> String {
        serde_json::to_string(&Self::check(inputs, calculator)).unwrap_or_default()
    }

    pub fn is_allowed(inputs: &OperatingInputs, calculator: Calculator) -> bool {
        Self::check(inputs, calculator).allowed
    }
}

impl InputGuard {
    pub fn check(inputs: &OperatingInputs, calculator: Calculator) -> RangeReport {
        let mut violations = Vec::new();

        for field in InputField::ALL {
            let value = inputs.get_field(field);

            // Every field must be usable arithmetic, whichever calculator is active
            if !value.is_finite() {
                violations.push(RangeViolation::new(field, value, "not a finite number".to_string()));
                continue;
            }
            if value < 0.0 {
                violations.push(RangeViolation::new(field, value, "negative".to_string()));
                continue;
            }
            if field == InputField::CodRemoval && value > 100.0 {
                violations.push(RangeViolation::new(field, value, "exceeds 100 %".to_string()));
                continue;
            }

            if let Some(range) = field.range(calculator) {
                if !range.contains(value) {
                    violations.push(RangeViolation::new(
                        field,
                        value,
                        format!(
                            "{:.2} {} outside slider range [{}, {}]",
                            value,
                            field.unit(),
                            range.min,
                            range.max
                        ),
                    ));
                }
            }
        }

        RangeReport {
            allowed: violations.is_empty(),
            violations,
        }
    }
}

impl RangeViolation {
    fn new(field: InputField, value: f64, reason: String) -> Self {
        RangeViolation {
            field,
            value,
            reason,
        }
    }
}
