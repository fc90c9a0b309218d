// ABOUTME: Trigger detection comparing high-symptom and low-symptom day cohorts
// ABOUTME: Flags pressure, sleep duration, and weekday factors that differ materially between cohorts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trigger detection.
//!
//! Days at or above the configured percentile of overall pain form the
//! high-symptom cohort; the rest form the low-symptom cohort. Each candidate
//! factor is compared only when both cohorts have enough days with data for
//! it. A factor without enough data is skipped without affecting the others.
#![allow(clippy::cast_precision_loss)] // Safe: cohort sizes are small

use crate::aggregator::{DailyFactor, DerivedDailyMetrics};
use crate::config::analysis::TriggerThresholds;
use crate::outcome::AnalysisOutcome;
use crate::pattern_detection::SUNDAY_FIRST;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate trigger factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Barometric pressure differs between cohorts
    WeatherPressure,
    /// Sleep duration differs between cohorts
    SleepDuration,
    /// High-symptom days cluster on one weekday
    DayOfWeek,
}

/// Trigger severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSeverity {
    /// Difference above the trigger threshold
    Medium,
    /// Difference well above the trigger threshold
    High,
}

/// Numbers behind a detected trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "comparison", rename_all = "snake_case")]
pub enum TriggerEvidence {
    /// Factor averages per cohort
    CohortAverages {
        /// Mean in the high-symptom cohort
        high_cohort_average: f64,
        /// Mean in the low-symptom cohort
        low_cohort_average: f64,
        /// `high_cohort_average - low_cohort_average`
        difference: f64,
    },
    /// Most frequent weekday in the high-symptom cohort
    WeekdayShare {
        /// Weekday
        weekday: Weekday,
        /// High-symptom days on that weekday
        occurrences: usize,
        /// `occurrences / high-symptom cohort size`
        share: f64,
    },
}

/// A factor flagged as a likely symptom trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerFactor {
    /// Factor
    pub kind: TriggerKind,
    /// Severity
    pub severity: TriggerSeverity,
    /// Supporting numbers
    pub evidence: TriggerEvidence,
}

/// Cohort split and the triggers it surfaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerAnalysis {
    /// Overall pain at the configured percentile
    pub pain_threshold: f64,
    /// Days with overall pain at or above the threshold
    pub high_cohort_size: usize,
    /// Remaining days
    pub low_cohort_size: usize,
    /// Detected triggers, in pressure, sleep, weekday order
    pub triggers: Vec<TriggerFactor>,
}

/// Trigger detection engine
pub struct TriggerDetector;

impl TriggerDetector {
    /// Split days into cohorts and compare candidate factors
    ///
    /// Returns insufficient data below `minimum_records` days.
    #[must_use]
    pub fn detect_triggers(
        days: &[DerivedDailyMetrics],
        minimum_records: usize,
        thresholds: &TriggerThresholds,
    ) -> AnalysisOutcome<TriggerAnalysis> {
        AnalysisOutcome::gate(minimum_records, days.len(), || {
            Self::analyze(days, thresholds)
        })
    }

    /// Nearest-rank percentile: sort ascending, take index `ceil(p/100 * n) - 1`
    ///
    /// Returns 0 for an empty slice.
    #[must_use]
    pub fn nearest_rank_percentile(values: &[f64], percentile: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let rank = (percentile / 100.0 * sorted.len() as f64).ceil();
        let index = if rank >= 1.0 { rank as usize - 1 } else { 0 };
        sorted
            .get(index.min(sorted.len() - 1))
            .copied()
            .unwrap_or(0.0)
    }

    fn analyze(days: &[DerivedDailyMetrics], thresholds: &TriggerThresholds) -> TriggerAnalysis {
        let pains: Vec<f64> = days.iter().map(|day| day.overall_pain).collect();
        let pain_threshold = Self::nearest_rank_percentile(&pains, thresholds.pain_percentile);

        let (high, low): (Vec<&DerivedDailyMetrics>, Vec<&DerivedDailyMetrics>) = days
            .iter()
            .partition(|day| day.overall_pain >= pain_threshold);

        let triggers: Vec<TriggerFactor> = [
            Self::compare_averages(
                TriggerKind::WeatherPressure,
                DailyFactor::Pressure,
                thresholds.pressure_difference_hpa,
                &high,
                &low,
                thresholds,
            ),
            Self::compare_averages(
                TriggerKind::SleepDuration,
                DailyFactor::SleepDuration,
                thresholds.sleep_difference_hours,
                &high,
                &low,
                thresholds,
            ),
            Self::compare_weekdays(&high, &low, thresholds),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!(
            days = days.len(),
            pain_threshold,
            high_cohort = high.len(),
            low_cohort = low.len(),
            triggers = triggers.len(),
            "Completed trigger detection"
        );

        TriggerAnalysis {
            pain_threshold,
            high_cohort_size: high.len(),
            low_cohort_size: low.len(),
            triggers,
        }
    }

    fn compare_averages(
        kind: TriggerKind,
        factor: DailyFactor,
        difference_threshold: f64,
        high: &[&DerivedDailyMetrics],
        low: &[&DerivedDailyMetrics],
        thresholds: &TriggerThresholds,
    ) -> Option<TriggerFactor> {
        let high_values: Vec<f64> = high.iter().filter_map(|day| factor.value(day)).collect();
        let low_values: Vec<f64> = low.iter().filter_map(|day| factor.value(day)).collect();
        if high_values.len() < thresholds.min_cohort_days
            || low_values.len() < thresholds.min_cohort_days
        {
            debug!(?kind, high = high_values.len(), low = low_values.len(), "Skipping factor");
            return None;
        }

        let high_cohort_average = StatisticalAnalyzer::mean(&high_values);
        let low_cohort_average = StatisticalAnalyzer::mean(&low_values);
        let difference = high_cohort_average - low_cohort_average;
        if difference.abs() <= difference_threshold {
            return None;
        }

        let severity =
            if difference.abs() > difference_threshold * thresholds.high_severity_multiplier {
                TriggerSeverity::High
            } else {
                TriggerSeverity::Medium
            };

        Some(TriggerFactor {
            kind,
            severity,
            evidence: TriggerEvidence::CohortAverages {
                high_cohort_average,
                low_cohort_average,
                difference,
            },
        })
    }

    fn compare_weekdays(
        high: &[&DerivedDailyMetrics],
        low: &[&DerivedDailyMetrics],
        thresholds: &TriggerThresholds,
    ) -> Option<TriggerFactor> {
        if high.len() < thresholds.min_cohort_days || low.len() < thresholds.min_cohort_days {
            return None;
        }

        let mut counts = [0_usize; 7];
        for day in high {
            if let Some(count) = counts.get_mut(day.weekday_index()) {
                *count += 1;
            }
        }

        // Later weekday wins ties
        let (index, occurrences) = counts
            .iter()
            .enumerate()
            .fold((0, 0), |best, (index, count)| {
                if *count >= best.1 {
                    (index, *count)
                } else {
                    best
                }
            });

        let share = occurrences as f64 / high.len() as f64;
        if share <= thresholds.weekday_share {
            return None;
        }

        Some(TriggerFactor {
            kind: TriggerKind::DayOfWeek,
            severity: if share > thresholds.weekday_high_share {
                TriggerSeverity::High
            } else {
                TriggerSeverity::Medium
            },
            evidence: TriggerEvidence::WeekdayShare {
                weekday: SUNDAY_FIRST.get(index).copied().unwrap_or(Weekday::Sun),
                occurrences,
                share,
            },
        })
    }
}
