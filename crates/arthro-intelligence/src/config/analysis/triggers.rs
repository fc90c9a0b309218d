// ABOUTME: Trigger detection thresholds for high/low symptom cohort comparison
// ABOUTME: Configurable because the established values carry no clinical validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Thresholds used when comparing high- and low-symptom cohorts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerThresholds {
    /// Percentile of overall pain that opens the high-symptom cohort (0-100]
    pub pain_percentile: f64,
    /// Days with data required in each cohort before a factor is compared
    pub min_cohort_days: usize,
    /// Cohort pressure difference (hPa) above which pressure is a trigger
    pub pressure_difference_hpa: f64,
    /// Cohort sleep-duration difference (hours) above which sleep is a trigger
    pub sleep_difference_hours: f64,
    /// Share of high-symptom days on one weekday above which it is a trigger
    pub weekday_share: f64,
    /// Share above which a weekday trigger is high severity
    pub weekday_high_share: f64,
    /// Multiple of a difference threshold above which a trigger is high severity
    pub high_severity_multiplier: f64,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            pain_percentile: 75.0,
            min_cohort_days: 3,
            pressure_difference_hpa: 5.0,
            sleep_difference_hours: 1.0,
            weekday_share: 0.3,
            weekday_high_share: 0.5,
            high_severity_multiplier: 2.0,
        }
    }
}
