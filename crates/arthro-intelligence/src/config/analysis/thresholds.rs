// ABOUTME: Minimum-data, correlation band, trend, weekly, and formatter thresholds
// ABOUTME: Defaults reproduce the journal's established analysis rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Minimum record counts below which an analysis reports insufficient data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumDataConfig {
    /// Records needed for weather, sleep, and medication correlations
    pub correlation_records: usize,
    /// Medication log entries needed for the medication correlation
    pub medication_logs: usize,
    /// Records needed for day-of-week patterns (two full weeks)
    pub weekly_records: usize,
    /// Records needed for monthly trends
    pub trend_records: usize,
    /// Records needed for trigger detection
    pub trigger_records: usize,
}

impl Default for MinimumDataConfig {
    fn default() -> Self {
        Self {
            correlation_records: 7,
            medication_logs: 7,
            weekly_records: 14,
            trend_records: 30,
            trigger_records: 14,
        }
    }
}

/// Lower bounds of the correlation strength bands, applied to `|r|`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Lower bound of the strong band
    pub strong_threshold: f64,
    /// Lower bound of the moderate band
    pub moderate_threshold: f64,
    /// Lower bound of the weak band
    pub weak_threshold: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.7,
            moderate_threshold: 0.5,
            weak_threshold: 0.3,
        }
    }
}

/// Monthly trend window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Calendar months analyzed, ending with the analysis month
    pub months_analyzed: u32,
    /// Months with data needed before a metric is reported in insights
    pub minimum_months: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            months_analyzed: 3,
            minimum_months: 2,
        }
    }
}

/// Weekly pattern reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyConfig {
    /// Points the peak pain day must exceed the weekly mean by to be reported
    pub peak_margin_points: f64,
}

impl Default for WeeklyConfig {
    fn default() -> Self {
        Self {
            peak_margin_points: 0.5,
        }
    }
}

/// Rules mapping numeric results to insights and recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// `|r|` at or above which a correlation yields an insight
    pub insight_correlation_threshold: f64,
    /// `|r|` at or above which a correlation yields a recommendation
    pub recommendation_correlation_threshold: f64,
    /// Adherence/swelling correlation below `-threshold` yields an inflammation insight
    pub inflammation_correlation_threshold: f64,
    /// Average adherence below which a warning is emitted (0.0-1.0)
    pub adherence_warning_rate: f64,
    /// Worsening monthly change (percent) that yields a high-priority recommendation
    pub trend_recommendation_percent: f64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            insight_correlation_threshold: 0.5,
            recommendation_correlation_threshold: 0.5,
            inflammation_correlation_threshold: 0.4,
            adherence_warning_rate: 0.8,
            trend_recommendation_percent: 20.0,
        }
    }
}
