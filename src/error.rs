// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use thiserror::Error;

/// Boundary failures. Degenerate arithmetic inside the projection model is
/// never an error; it surfaces as a `None` sentinel on the result instead.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Unknown scenario: '{0}' (expected optimistic, realistic or conservative)")]
    UnknownScenario(String),

    #[error("Unknown {kind} identifier: {id}")]
    UnknownReference { kind: &'static str, id: String },

    #[error("Invalid sensitivity parameters: {0}")]
    InvalidSensitivity(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, ProjectionError>;

/// Render an error the way the WASM entry points hand it back to TypeScript.
pub(crate) fn error_json(err: &ProjectionError) -> String {
    serde_json::to_string(&serde_json::json!({ "error": err.to_string() })).unwrap_or_default()
}
