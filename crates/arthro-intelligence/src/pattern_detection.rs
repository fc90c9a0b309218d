// ABOUTME: Day-of-week pattern detection over derived daily metrics
// ABOUTME: Buckets days Sunday-first and averages pain, fatigue, mood, and sleep quality per bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::{DailyFactor, DerivedDailyMetrics};
use crate::outcome::AnalysisOutcome;
use crate::statistical_analysis::StatisticalAnalyzer;
use arthro_core::constants::WEEKDAY_NAMES;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weekdays in bucket order (Sunday = 0)
pub const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Averages for one day-of-week bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekAverages {
    /// Day of week
    pub weekday: Weekday,
    /// Display name
    pub day_name: String,
    /// Mean overall pain
    pub pain: f64,
    /// Mean physical fatigue over days that recorded it
    pub fatigue: f64,
    /// Mean mood over days that recorded it
    pub mood: f64,
    /// Mean sleep quality over days that recorded it
    pub sleep_quality: f64,
    /// Days in the bucket; 0 distinguishes "no data" from averages of zero
    pub data_count: usize,
}

/// Day-of-week pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPattern {
    /// Seven buckets, Sunday first
    pub days: Vec<DayOfWeekAverages>,
    /// Bucket with the highest mean pain among buckets with data
    pub peak_pain_day: Option<Weekday>,
    /// Mean of the pain averages of buckets with data
    pub mean_pain: f64,
    /// Days analyzed
    pub data_count: usize,
}

impl WeeklyPattern {
    /// Averages for the given weekday
    #[must_use]
    pub fn bucket(&self, weekday: Weekday) -> Option<&DayOfWeekAverages> {
        self.days.iter().find(|bucket| bucket.weekday == weekday)
    }

    /// Peak pain bucket, if any bucket has data
    #[must_use]
    pub fn peak(&self) -> Option<&DayOfWeekAverages> {
        self.peak_pain_day.and_then(|weekday| self.bucket(weekday))
    }
}

/// Pattern detection engine
pub struct PatternDetector;

impl PatternDetector {
    /// Bucket days by weekday and average each metric per bucket
    ///
    /// Returns insufficient data below `minimum_records` days.
    #[must_use]
    pub fn weekly_pattern(
        days: &[DerivedDailyMetrics],
        minimum_records: usize,
    ) -> AnalysisOutcome<WeeklyPattern> {
        AnalysisOutcome::gate(minimum_records, days.len(), || Self::build_pattern(days))
    }

    fn build_pattern(days: &[DerivedDailyMetrics]) -> WeeklyPattern {
        let mut buckets: [Vec<&DerivedDailyMetrics>; 7] = Default::default();
        for day in days {
            if let Some(bucket) = buckets.get_mut(day.weekday_index()) {
                bucket.push(day);
            }
        }

        let averages: Vec<DayOfWeekAverages> = SUNDAY_FIRST
            .iter()
            .zip(WEEKDAY_NAMES)
            .zip(&buckets)
            .map(|((weekday, name), bucket)| DayOfWeekAverages {
                weekday: *weekday,
                day_name: name.to_owned(),
                pain: Self::bucket_mean(bucket, DailyFactor::Pain),
                fatigue: Self::bucket_mean(bucket, DailyFactor::Fatigue),
                mood: Self::bucket_mean(bucket, DailyFactor::Mood),
                sleep_quality: Self::bucket_mean(bucket, DailyFactor::SleepQuality),
                data_count: bucket.len(),
            })
            .collect();

        let populated: Vec<&DayOfWeekAverages> =
            averages.iter().filter(|bucket| bucket.data_count > 0).collect();

        // Earliest bucket wins ties
        let peak_pain_day = populated
            .iter()
            .fold(None::<&DayOfWeekAverages>, |best, bucket| match best {
                Some(current) if current.pain >= bucket.pain => Some(current),
                _ => Some(*bucket),
            })
            .map(|bucket| bucket.weekday);

        let populated_pain: Vec<f64> = populated.iter().map(|bucket| bucket.pain).collect();
        let mean_pain = StatisticalAnalyzer::mean(&populated_pain);

        debug!(
            days = days.len(),
            populated_buckets = populated.len(),
            peak = ?peak_pain_day,
            "Computed weekly pattern"
        );

        WeeklyPattern {
            days: averages,
            peak_pain_day,
            mean_pain,
            data_count: days.len(),
        }
    }

    fn bucket_mean(bucket: &[&DerivedDailyMetrics], metric: DailyFactor) -> f64 {
        let values: Vec<f64> = bucket.iter().filter_map(|day| metric.value(day)).collect();
        StatisticalAnalyzer::mean(&values)
    }
}
