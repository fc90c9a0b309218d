// ABOUTME: Configuration module for arthro-intelligence crate
// ABOUTME: Re-exports analysis configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analysis thresholds (minimum data, correlation bands, triggers, formatter rules)
pub mod analysis;

pub use analysis::{AnalysisConfig, ConfigError};
