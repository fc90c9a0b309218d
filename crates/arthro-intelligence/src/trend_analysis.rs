// ABOUTME: Monthly trend analysis for pain, fatigue, and mood over the most recent calendar months
// ABOUTME: Computes per-month means, first-to-last change rate, and a three-way direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Monthly trends.
//!
//! Months are calendar months (`YYYY-MM`) ending with the month of the
//! analysis date. Data older than the window is ignored, and months whose
//! average is not positive are left out. The direction boundary is fixed: a
//! change of at most 10 % in magnitude is stable. Change rates are rounded to
//! nine decimal places before classification, so `2.0 -> 2.2` is exactly 10 %.

use crate::aggregator::{DailyFactor, DerivedDailyMetrics};
use crate::config::analysis::TrendConfig;
use crate::outcome::AnalysisOutcome;
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Largest magnitude of monthly change (percent) that is still stable
pub const STABLE_CHANGE_PERCENT: f64 = 10.0;

/// Change rates are rounded to multiples of `1 / CHANGE_RATE_SCALE` percent
const CHANGE_RATE_SCALE: f64 = 1e9;

/// Metrics tracked month over month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Overall pain
    Pain,
    /// Physical fatigue
    Fatigue,
    /// Mood
    Mood,
}

impl TrendMetric {
    /// All tracked metrics
    pub const ALL: [Self; 3] = [Self::Pain, Self::Fatigue, Self::Mood];

    /// Daily factor backing this metric
    #[must_use]
    pub const fn factor(self) -> DailyFactor {
        match self {
            Self::Pain => DailyFactor::Pain,
            Self::Fatigue => DailyFactor::Fatigue,
            Self::Mood => DailyFactor::Mood,
        }
    }

    /// Whether a rising value means the patient is doing worse
    #[must_use]
    pub const fn higher_is_worse(self) -> bool {
        !matches!(self, Self::Mood)
    }
}

/// Direction of a monthly trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Rising by more than 10 %
    Increasing,
    /// Falling by more than 10 %
    Decreasing,
    /// Changing by at most 10 %
    Stable,
}

impl TrendDirection {
    /// Classify a change rate in percent
    #[must_use]
    pub fn from_change_rate(change_rate_percent: f64) -> Self {
        let change_rate_percent = round_change_rate(change_rate_percent);
        if change_rate_percent.abs() <= STABLE_CHANGE_PERCENT {
            Self::Stable
        } else if change_rate_percent > 0.0 {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }
}

/// Mean of a metric for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// Month key, `YYYY-MM`
    pub month: String,
    /// Mean of the metric over the month's samples
    pub average: f64,
    /// Samples in the month
    pub sample_count: usize,
}

/// Trend of one metric across the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Metric analyzed
    pub metric: TrendMetric,
    /// Direction classification
    pub trend: TrendDirection,
    /// `(last - first) / first * 100`, 0 when `first` is 0 or fewer than two months
    pub change_rate_percent: f64,
    /// Months with a positive average, oldest first
    pub months: Vec<MonthlyAverage>,
}

impl MonthlyTrend {
    /// Build a trend from ordered per-month averages
    #[must_use]
    pub fn from_monthly_averages(metric: TrendMetric, months: Vec<MonthlyAverage>) -> Self {
        let change_rate_percent = match (months.first(), months.last()) {
            (Some(first), Some(last)) if months.len() >= 2 && first.average != 0.0 => {
                round_change_rate((last.average - first.average) / first.average * 100.0)
            }
            _ => 0.0,
        };

        Self {
            metric,
            trend: TrendDirection::from_change_rate(change_rate_percent),
            change_rate_percent,
            months,
        }
    }

    /// Whether the trend moves in the unfavorable direction for its metric
    #[must_use]
    pub fn is_worsening(&self) -> bool {
        match self.trend {
            TrendDirection::Stable => false,
            TrendDirection::Increasing => self.metric.higher_is_worse(),
            TrendDirection::Decreasing => !self.metric.higher_is_worse(),
        }
    }
}

/// Monthly trend engine
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Trend of one metric over the `months_analyzed` months ending with `as_of`'s month
    #[must_use]
    pub fn monthly_trend(
        days: &[DerivedDailyMetrics],
        metric: TrendMetric,
        as_of: NaiveDate,
        months_analyzed: u32,
    ) -> MonthlyTrend {
        let last_month = month_index(as_of);
        let first_month = last_month - i32::try_from(months_analyzed).unwrap_or(i32::MAX) + 1;

        let mut samples: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for day in days {
            let month = month_index(day.date);
            if month < first_month || month > last_month {
                continue;
            }
            if let Some(value) = metric.factor().value(day) {
                samples.entry(month).or_default().push(value);
            }
        }

        let months = samples
            .into_iter()
            .map(|(month, values)| MonthlyAverage {
                month: month_key(month),
                average: StatisticalAnalyzer::mean(&values),
                sample_count: values.len(),
            })
            .filter(|month| month.average > 0.0)
            .collect();

        MonthlyTrend::from_monthly_averages(metric, months)
    }

    /// Trends for pain, fatigue, and mood, gated on `minimum_records` days
    #[must_use]
    pub fn monthly_trends(
        days: &[DerivedDailyMetrics],
        as_of: NaiveDate,
        minimum_records: usize,
        config: &TrendConfig,
    ) -> AnalysisOutcome<Vec<MonthlyTrend>> {
        AnalysisOutcome::gate(minimum_records, days.len(), || {
            let trends: Vec<MonthlyTrend> = TrendMetric::ALL
                .iter()
                .map(|metric| Self::monthly_trend(days, *metric, as_of, config.months_analyzed))
                .collect();

            debug!(
                days = days.len(),
                %as_of,
                months = config.months_analyzed,
                "Computed monthly trends"
            );

            trends
        })
    }
}

fn round_change_rate(change_rate_percent: f64) -> f64 {
    let scaled = (change_rate_percent * CHANGE_RATE_SCALE).round();
    if scaled.is_finite() {
        scaled / CHANGE_RATE_SCALE
    } else {
        change_rate_percent
    }
}

/// Months since year 0, so consecutive months differ by one
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + i32::try_from(date.month0()).unwrap_or(0)
}

fn month_key(index: i32) -> String {
    format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(values: &[f64]) -> Vec<MonthlyAverage> {
        values
            .iter()
            .enumerate()
            .map(|(i, average)| MonthlyAverage {
                month: format!("2025-0{}", i + 1),
                average: *average,
                sample_count: 10,
            })
            .collect()
    }

    #[test]
    fn test_first_month_zero_guards_change_rate() {
        let trend = MonthlyTrend::from_monthly_averages(TrendMetric::Pain, averages(&[0.0, 3.0]));
        assert!(trend.change_rate_percent.abs() < f64::EPSILON);
        assert_eq!(trend.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_single_month_is_stable() {
        let trend = MonthlyTrend::from_monthly_averages(TrendMetric::Pain, averages(&[3.0]));
        assert_eq!(trend.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_mood_decline_is_worsening() {
        let trend = MonthlyTrend::from_monthly_averages(TrendMetric::Mood, averages(&[4.0, 3.0]));
        assert_eq!(trend.trend, TrendDirection::Decreasing);
        assert!(trend.is_worsening());
    }

    #[test]
    fn test_round_change_rate_absorbs_float_noise() {
        assert!((round_change_rate(10.000_000_000_000_009) - 10.0).abs() < f64::EPSILON);
        assert!(round_change_rate(10.001) > 10.0);
        assert_eq!(
            TrendDirection::from_change_rate(-10.000_000_000_000_009),
            TrendDirection::Stable
        );
        assert_eq!(
            TrendDirection::from_change_rate(-10.01),
            TrendDirection::Decreasing
        );
    }

    #[test]
    fn test_month_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(month_key(month_index(date)), "2024-12");
        assert_eq!(month_key(month_index(date) + 1), "2025-01");
    }
}
