// ABOUTME: Shared test utilities and journal fixtures for integration tests
// ABOUTME: Provides record builders, day sequences, and aggregation shortcuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `arthro_insights`
//!
//! Fixtures record pain on the knees unless a test needs more joints, so the
//! overall pain of a day equals the knee pain.

use arthro_core::models::{DailyHealthRecord, JointSymptoms, MedicationLogEntry, SleepRecord};
use arthro_intelligence::{DerivedDailyMetrics, RecordAggregator};
use chrono::{Duration, NaiveDate};

/// Baseline pressure for fixtures that do not vary it
pub const BASELINE_PRESSURE_HPA: f64 = 1_015.0;

/// Build a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `start` plus `offset` days
pub fn day_after(start: NaiveDate, offset: usize) -> NaiveDate {
    start + Duration::days(i64::try_from(offset).unwrap())
}

/// Record with knee pain only
pub fn pain_record(date: NaiveDate, pain: u8) -> DailyHealthRecord {
    DailyHealthRecord::new(date).with_joint("knees", JointSymptoms::pain(pain))
}

/// Record with knee pain and a pressure reading
pub fn weather_record(date: NaiveDate, pain: u8, pressure_hpa: f64) -> DailyHealthRecord {
    pain_record(date, pain).with_pressure(pressure_hpa)
}

/// Record with knee pain and the previous night's sleep duration
pub fn sleep_record(date: NaiveDate, pain: u8, hours: f64) -> DailyHealthRecord {
    pain_record(date, pain).with_sleep(SleepRecord {
        duration_hours: Some(hours),
        ..SleepRecord::default()
    })
}

/// Consecutive records starting at `start`, knee pain taken from `pains`
pub fn pain_series(start: NaiveDate, pains: &[u8]) -> Vec<DailyHealthRecord> {
    pains
        .iter()
        .enumerate()
        .map(|(offset, pain)| pain_record(day_after(start, offset), *pain))
        .collect()
}

/// `count` scheduled doses on `date`, the first `taken` of them taken
pub fn doses(date: NaiveDate, count: usize, taken: usize) -> Vec<MedicationLogEntry> {
    (0..count)
        .map(|i| MedicationLogEntry::new(date, "methotrexate", i < taken))
        .collect()
}

/// Aggregate records without medication logs
pub fn derive(records: &[DailyHealthRecord]) -> Vec<DerivedDailyMetrics> {
    RecordAggregator::aggregate(records, &[])
}

/// Thirty days where the five highest-pain days coincide with a falling barometer
///
/// Days 12-16 have pain 5 and pressure 10, 20, 30, 40, 50 hPa below the
/// baseline. Days 4, 21, and 27 have pain 4 at baseline pressure. All other
/// days cycle pain 1, 2, 3 at baseline pressure.
pub fn pressure_drop_month(start: NaiveDate) -> Vec<DailyHealthRecord> {
    let mut low_pain = [1_u8, 2, 3].into_iter().cycle();
    (0..30)
        .map(|offset| {
            let date = day_after(start, offset);
            match offset {
                12..=16 => {
                    let drop = f64::from(u8::try_from(offset - 11).unwrap()) * 10.0;
                    weather_record(date, 5, BASELINE_PRESSURE_HPA - drop)
                }
                4 | 21 | 27 => weather_record(date, 4, BASELINE_PRESSURE_HPA),
                _ => weather_record(date, low_pain.next().unwrap(), BASELINE_PRESSURE_HPA),
            }
        })
        .collect()
}

/// Approximate float equality for assertions
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
