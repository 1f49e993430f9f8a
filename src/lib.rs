// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MES Impact Core
// Projection model behind the microbial electrochemical systems dashboard
//

pub mod error;
pub mod formulas;
pub mod optimization;
pub mod projection_kernel;
pub mod reference;
pub mod safety; // Advisory slider-range checks
pub mod science;
#[cfg(test)]
pub mod tests_projection;

// Re-export core types
pub use error::{CoreResult, ProjectionError};
pub use optimization::SensitivityAnalyzer;
pub use projection_kernel::{ProjectionConfig, ProjectionKernel, ProjectionResult};
pub use reference::ReferenceData;
pub use safety::InputGuard;
pub use science::economics::EconomicEngine;
pub use science::inputs::{Calculator, InputField, OperatingInputs};
pub use science::scenario::Scenario;
pub use science::sustainability::SustainabilityEngine;
