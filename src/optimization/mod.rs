// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod monte_carlo;

pub use monte_carlo::{Band, SensitivityAnalyzer, SensitivityReport};
