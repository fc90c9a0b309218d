// ABOUTME: Life-pattern analytics engine for arthritis journal records
// ABOUTME: Extracted from the facade crate so analyzers compile and test independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Arthro Intelligence
//!
//! Pure, synchronous analytics over a list of daily journal records.
//!
//! Records flow one way: the [`aggregator`] derives per-day scalars, the
//! correlation, weekly, trend, and trigger analyzers consume those scalars
//! independently, and [`insights`] turns their numeric results into insight
//! and recommendation records. [`life_pattern`] runs the whole pipeline.

/// Per-day derived metrics and joint summaries
pub mod aggregator;
/// Analysis thresholds with environment overrides
pub mod config;
/// Named weather, sleep, and medication correlation analyses
pub mod correlation_analysis;
/// Insight and recommendation formatting
pub mod insights;
/// Full life-pattern analysis pipeline and report
pub mod life_pattern;
/// Result wrapper for minimum-data gating
pub mod outcome;
/// Day-of-week pattern analysis
pub mod pattern_detection;
/// Pearson correlation and strength classification
pub mod statistical_analysis;
/// Monthly trend analysis
pub mod trend_analysis;
/// High/low symptom cohort trigger detection
pub mod trigger_detection;
/// Barometric pressure context (levels, symptom impact, pressure-drop alerts)
pub mod weather;

pub use aggregator::{DailyFactor, DerivedDailyMetrics, RecordAggregator, SymptomSeverity};
pub use config::AnalysisConfig;
pub use insights::{Insight, InsightFormatter, InsightType, Priority, Recommendation};
pub use life_pattern::{LifePatternAnalyzer, LifePatternReport};
pub use outcome::AnalysisOutcome;
pub use statistical_analysis::{CorrelationResult, CorrelationStrength, StatisticalAnalyzer};
