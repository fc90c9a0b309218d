// ABOUTME: Record aggregator deriving per-day scalars from journal records and medication logs
// ABOUTME: Also summarizes joint symptoms across days and classifies symptom severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-day aggregation.
//!
//! Each [`DailyHealthRecord`] becomes one [`DerivedDailyMetrics`]. Overall
//! pain, swelling, and stiffness average only the joints with a recorded
//! value above zero, so a day with no joint data and a day with every joint
//! at zero both score `0.0`. Optional fields stay `None` so that consumers
//! can exclude the day from the computations that need them.

use arthro_core::constants::joints::{Joint, JOINT_AREAS};
use arthro_core::constants::symptom_scales::{MILD_LEVEL, MODERATE_LEVEL, SEVERE_LEVEL};
use arthro_core::models::{DailyHealthRecord, JointSymptoms, MedicationLogEntry, SymptomKind};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Scalars derived from one day's record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedDailyMetrics {
    /// Calendar day
    pub date: NaiveDate,
    /// Day of week
    pub weekday: Weekday,
    /// Mean pain across joints with pain > 0 (0 when none)
    pub overall_pain: f64,
    /// Mean swelling across joints with swelling > 0 (0 when none)
    pub overall_swelling: f64,
    /// Mean stiffness across joints with stiffness > 0 (0 when none)
    pub overall_stiffness: f64,
    /// Barometric pressure (hPa)
    pub pressure_hpa: Option<f64>,
    /// Relative humidity (%)
    pub humidity_percent: Option<f64>,
    /// Air temperature (Celsius)
    pub temperature_celsius: Option<f64>,
    /// Sleep duration (hours)
    pub sleep_duration_hours: Option<f64>,
    /// Sleep quality (1-5)
    pub sleep_quality: Option<f64>,
    /// Night-time awakenings
    pub sleep_interruptions: Option<f64>,
    /// Morning stiffness (1-5)
    pub morning_stiffness: Option<f64>,
    /// Physical fatigue (1-5)
    pub physical_fatigue: Option<f64>,
    /// Mental fatigue (1-5)
    pub mental_fatigue: Option<f64>,
    /// Mood (1-5, higher is better)
    pub mood: Option<f64>,
    /// Stress (1-5)
    pub stress: Option<f64>,
    /// Doses scheduled on this day
    pub scheduled_doses: u32,
    /// Doses taken on this day
    pub taken_doses: u32,
    /// `taken_doses / scheduled_doses`, 0 when nothing was scheduled
    pub adherence_rate: f64,
}

impl DerivedDailyMetrics {
    /// Day-of-week bucket index, Sunday = 0
    #[must_use]
    pub fn weekday_index(&self) -> usize {
        self.weekday.num_days_from_sunday() as usize
    }
}

/// Per-day quantity that can be paired with another for correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyFactor {
    /// Overall pain
    Pain,
    /// Overall swelling
    Swelling,
    /// Overall stiffness
    Stiffness,
    /// Barometric pressure
    Pressure,
    /// Relative humidity
    Humidity,
    /// Air temperature
    Temperature,
    /// Sleep duration
    SleepDuration,
    /// Sleep quality
    SleepQuality,
    /// Night-time awakenings
    SleepInterruptions,
    /// Morning stiffness
    MorningStiffness,
    /// Physical fatigue
    Fatigue,
    /// Mood
    Mood,
    /// Stress
    Stress,
    /// Medication adherence, 0 on days with nothing scheduled
    Adherence,
}

impl DailyFactor {
    /// Value of this factor on the given day, `None` when not recorded
    #[must_use]
    pub fn value(self, day: &DerivedDailyMetrics) -> Option<f64> {
        match self {
            Self::Pain => Some(day.overall_pain),
            Self::Swelling => Some(day.overall_swelling),
            Self::Stiffness => Some(day.overall_stiffness),
            Self::Pressure => day.pressure_hpa,
            Self::Humidity => day.humidity_percent,
            Self::Temperature => day.temperature_celsius,
            Self::SleepDuration => day.sleep_duration_hours,
            Self::SleepQuality => day.sleep_quality,
            Self::SleepInterruptions => day.sleep_interruptions,
            Self::MorningStiffness => day.morning_stiffness,
            Self::Fatigue => day.physical_fatigue,
            Self::Mood => day.mood,
            Self::Stress => day.stress,
            Self::Adherence => Some(day.adherence_rate),
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pain => "pain",
            Self::Swelling => "swelling",
            Self::Stiffness => "stiffness",
            Self::Pressure => "barometric pressure",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
            Self::SleepDuration => "sleep duration",
            Self::SleepQuality => "sleep quality",
            Self::SleepInterruptions => "sleep interruptions",
            Self::MorningStiffness => "morning stiffness",
            Self::Fatigue => "fatigue",
            Self::Mood => "mood",
            Self::Stress => "stress",
            Self::Adherence => "medication adherence",
        }
    }
}

/// Qualitative severity of a single symptom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSeverity {
    /// Below the mild level
    None,
    /// Mild symptom
    Mild,
    /// Moderate symptom
    Moderate,
    /// Severe symptom
    Severe,
}

impl SymptomSeverity {
    /// Classify a recorded symptom level
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        if level >= SEVERE_LEVEL {
            Self::Severe
        } else if level >= MODERATE_LEVEL {
            Self::Moderate
        } else if level >= MILD_LEVEL {
            Self::Mild
        } else {
            Self::None
        }
    }
}

/// Running totals for one symptom on one joint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomTotals {
    /// Sum of recorded levels
    pub total: u32,
    /// Days with a level above zero
    pub count: u32,
    /// `total / count`, 0 when `count` is 0
    pub average: f64,
}

impl SymptomTotals {
    fn record(&mut self, level: u8) {
        if level > 0 {
            self.total += u32::from(level);
            self.count += 1;
        }
    }

    fn finish(mut self) -> Self {
        self.average = if self.count == 0 {
            0.0
        } else {
            f64::from(self.total) / f64::from(self.count)
        };
        self
    }
}

/// Symptom totals for one joint across a set of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSymptomSummary {
    /// Joint summarized
    pub joint: Joint,
    /// Pain totals
    pub pain: SymptomTotals,
    /// Swelling totals
    pub swelling: SymptomTotals,
    /// Stiffness totals
    pub stiffness: SymptomTotals,
}

/// Record aggregation engine
pub struct RecordAggregator;

impl RecordAggregator {
    /// Derive one metrics entry per record, preserving input order
    #[must_use]
    pub fn aggregate(
        records: &[DailyHealthRecord],
        medication_logs: &[MedicationLogEntry],
    ) -> Vec<DerivedDailyMetrics> {
        let doses = Self::doses_by_date(medication_logs);

        let days: Vec<DerivedDailyMetrics> = records
            .iter()
            .map(|record| {
                let (scheduled, taken) = doses.get(&record.date).copied().unwrap_or((0, 0));
                Self::derive_day(record, scheduled, taken)
            })
            .collect();

        debug!(
            records = records.len(),
            medication_logs = medication_logs.len(),
            days_with_doses = days.iter().filter(|d| d.scheduled_doses > 0).count(),
            "Aggregated daily metrics"
        );

        days
    }

    /// Mean of the given symptom across joints with a level above zero, 0 when none
    #[must_use]
    pub fn overall_level<'a>(
        joints: impl IntoIterator<Item = &'a JointSymptoms>,
        kind: SymptomKind,
    ) -> f64 {
        let (sum, count) = joints
            .into_iter()
            .map(|symptoms| symptoms.level(kind))
            .filter(|level| *level > 0)
            .fold((0_u32, 0_u32), |(sum, count), level| {
                (sum + u32::from(level), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }

    /// Summarize pain, swelling, and stiffness per joint in body-map order
    ///
    /// Joint identifiers missing from the joint table are ignored.
    #[must_use]
    pub fn summarize_joints(records: &[DailyHealthRecord]) -> Vec<JointSymptomSummary> {
        JOINT_AREAS
            .iter()
            .map(|area| {
                let mut pain = SymptomTotals::default();
                let mut swelling = SymptomTotals::default();
                let mut stiffness = SymptomTotals::default();

                for symptoms in records
                    .iter()
                    .filter_map(|record| record.joint_symptoms.get(area.id))
                {
                    pain.record(symptoms.pain);
                    swelling.record(symptoms.swelling);
                    stiffness.record(symptoms.stiffness);
                }

                JointSymptomSummary {
                    joint: area.joint,
                    pain: pain.finish(),
                    swelling: swelling.finish(),
                    stiffness: stiffness.finish(),
                }
            })
            .collect()
    }

    fn derive_day(record: &DailyHealthRecord, scheduled: u32, taken: u32) -> DerivedDailyMetrics {
        let joints = record.joint_symptoms.values();
        let general = &record.general_symptoms;
        let sleep = &general.sleep;
        let environment = &record.environmental;

        DerivedDailyMetrics {
            date: record.date,
            weekday: record.date.weekday(),
            overall_pain: Self::overall_level(joints.clone(), SymptomKind::Pain),
            overall_swelling: Self::overall_level(joints.clone(), SymptomKind::Swelling),
            overall_stiffness: Self::overall_level(joints, SymptomKind::Stiffness),
            pressure_hpa: environment.pressure_hpa,
            humidity_percent: environment.humidity_percent,
            temperature_celsius: environment.temperature_celsius,
            sleep_duration_hours: sleep.duration_hours,
            sleep_quality: sleep.quality.map(f64::from),
            sleep_interruptions: sleep.interruptions.map(f64::from),
            morning_stiffness: sleep.morning_stiffness.map(f64::from),
            physical_fatigue: general.fatigue.physical.map(f64::from),
            mental_fatigue: general.fatigue.mental.map(f64::from),
            mood: general.mood.map(f64::from),
            stress: general.stress.map(f64::from),
            scheduled_doses: scheduled,
            taken_doses: taken,
            adherence_rate: if scheduled == 0 {
                0.0
            } else {
                f64::from(taken) / f64::from(scheduled)
            },
        }
    }

    fn doses_by_date(medication_logs: &[MedicationLogEntry]) -> HashMap<NaiveDate, (u32, u32)> {
        let mut doses: HashMap<NaiveDate, (u32, u32)> = HashMap::new();
        for entry in medication_logs {
            let (scheduled, taken) = doses.entry(entry.date).or_insert((0, 0));
            *scheduled += 1;
            if entry.taken {
                *taken += 1;
            }
        }
        doses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_overall_level_excludes_zero_joints() {
        let record = DailyHealthRecord::new(day(2))
            .with_joint("knees", JointSymptoms::pain(4))
            .with_joint("wrists", JointSymptoms::pain(2))
            .with_joint("hips", JointSymptoms::pain(0));
        let days = RecordAggregator::aggregate(&[record], &[]);
        assert!((days[0].overall_pain - 3.0).abs() < f64::EPSILON);
        assert!(days[0].overall_swelling.abs() < f64::EPSILON);
    }

    #[test]
    fn test_adherence_counts_doses_per_date() {
        let logs = vec![
            MedicationLogEntry::new(day(2), "MTX", true),
            MedicationLogEntry::new(day(2), "MTX", false),
            MedicationLogEntry::new(day(2), "Folic acid", true),
            MedicationLogEntry::new(day(3), "MTX", true),
        ];
        let days = RecordAggregator::aggregate(
            &[DailyHealthRecord::new(day(2)), DailyHealthRecord::new(day(4))],
            &logs,
        );
        assert_eq!(days[0].scheduled_doses, 3);
        assert_eq!(days[0].taken_doses, 2);
        assert!((days[0].adherence_rate - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(days[1].scheduled_doses, 0);
        assert!(days[1].adherence_rate.abs() < f64::EPSILON);
        assert_eq!(DailyFactor::Adherence.value(&days[1]), Some(0.0));
    }

    #[test]
    fn test_symptom_severity_bands() {
        assert_eq!(SymptomSeverity::from_level(0), SymptomSeverity::None);
        assert_eq!(SymptomSeverity::from_level(1), SymptomSeverity::None);
        assert_eq!(SymptomSeverity::from_level(2), SymptomSeverity::Mild);
        assert_eq!(SymptomSeverity::from_level(3), SymptomSeverity::Moderate);
        assert_eq!(SymptomSeverity::from_level(5), SymptomSeverity::Severe);
    }
}
