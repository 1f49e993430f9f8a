// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod economics;
pub mod inputs;
pub mod scenario;
pub mod sustainability;
