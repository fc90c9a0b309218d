// ABOUTME: Main library entry point for arthritis journal life-pattern analytics
// ABOUTME: Re-exports the core models and analysis engine, and owns logging and journal file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Arthro Insights
//!
//! Life-pattern analytics over an arthritis health journal. Daily records of
//! joint symptoms, general wellbeing, and weather are combined with
//! medication logs to find correlations, weekly rhythms, monthly trends, and
//! likely symptom triggers, then summarized as prioritized insights and
//! recommendations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arthro_insights::{journal, AnalysisConfig, LifePatternAnalyzer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = journal::read_records("records.json")?;
//! let medications = journal::read_medication_logs("medications.json")?;
//!
//! let analyzer = LifePatternAnalyzer::new(AnalysisConfig::load_or_default());
//! let report = analyzer.analyze(&records, &medications);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **arthro-core**: record models, constant tables, and `AppError`
//! - **arthro-intelligence**: aggregation, correlation, pattern, trend, and trigger analysis
//! - **journal**: JSON export loading for the CLI
//! - **logging**: `tracing` subscriber setup

/// Journal export loading
pub mod journal;

/// Structured logging setup
pub mod logging;

pub use arthro_core::errors::{AppError, AppResult, ErrorCode};
pub use arthro_core::models::{
    DailyHealthRecord, EnvironmentalConditions, GeneralSymptoms, JointSymptoms,
    MedicationLogEntry, SleepRecord,
};
pub use arthro_intelligence::{
    AnalysisConfig, AnalysisOutcome, CorrelationResult, CorrelationStrength, Insight,
    InsightFormatter, InsightType, LifePatternAnalyzer, LifePatternReport, Priority,
    Recommendation,
};
