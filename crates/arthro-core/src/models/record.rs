// ABOUTME: Daily health record model with joint symptoms, general symptoms, and environment
// ABOUTME: Optional journal fields are typed as Option so consumers must handle absence explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::deserialize::{
    flexible_date, optional_count, optional_finite, optional_level, optional_positive, severity,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Joint-level symptom kinds recorded on the body map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKind {
    /// Pain severity (1-5)
    Pain,
    /// Swelling severity (1-5)
    Swelling,
    /// Stiffness severity (1-5)
    Stiffness,
    /// Redness severity (1-3)
    Redness,
    /// Warmth severity (1-3)
    Warmth,
}

/// Symptom severities for one joint on one day; `0` means not recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSymptoms {
    /// Pain severity
    #[serde(default, deserialize_with = "severity")]
    pub pain: u8,
    /// Swelling severity
    #[serde(default, deserialize_with = "severity")]
    pub swelling: u8,
    /// Stiffness severity
    #[serde(default, deserialize_with = "severity")]
    pub stiffness: u8,
    /// Redness severity
    #[serde(default, deserialize_with = "severity")]
    pub redness: u8,
    /// Warmth severity
    #[serde(default, deserialize_with = "severity")]
    pub warmth: u8,
}

impl JointSymptoms {
    /// Joint entry with only pain recorded
    #[must_use]
    pub const fn pain(level: u8) -> Self {
        Self {
            pain: level,
            swelling: 0,
            stiffness: 0,
            redness: 0,
            warmth: 0,
        }
    }

    /// Severity recorded for the given symptom kind
    #[must_use]
    pub const fn level(&self, kind: SymptomKind) -> u8 {
        match kind {
            SymptomKind::Pain => self.pain,
            SymptomKind::Swelling => self.swelling,
            SymptomKind::Stiffness => self.stiffness,
            SymptomKind::Redness => self.redness,
            SymptomKind::Warmth => self.warmth,
        }
    }
}

/// Physical and mental fatigue levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueLevels {
    /// Physical fatigue (1-5)
    #[serde(default, deserialize_with = "optional_level")]
    pub physical: Option<u8>,
    /// Mental fatigue (1-5)
    #[serde(default, deserialize_with = "optional_level")]
    pub mental: Option<u8>,
}

/// Previous night's sleep
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Sleep duration in hours
    #[serde(
        default,
        rename = "duration",
        deserialize_with = "optional_positive"
    )]
    pub duration_hours: Option<f64>,
    /// Subjective sleep quality (1-5)
    #[serde(default, deserialize_with = "optional_level")]
    pub quality: Option<u8>,
    /// Number of night-time awakenings (0 is a valid observation)
    #[serde(default, deserialize_with = "optional_count")]
    pub interruptions: Option<u8>,
    /// Morning stiffness level (1-5)
    #[serde(default, deserialize_with = "optional_level")]
    pub morning_stiffness: Option<u8>,
}

/// Whole-body symptoms for the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralSymptoms {
    /// Fatigue levels
    #[serde(default)]
    pub fatigue: FatigueLevels,
    /// Sleep record
    #[serde(default)]
    pub sleep: SleepRecord,
    /// Mood (1-5, higher is better)
    #[serde(default, deserialize_with = "optional_level")]
    pub mood: Option<u8>,
    /// Stress (1-5)
    #[serde(default, deserialize_with = "optional_level")]
    pub stress: Option<u8>,
}

/// Environmental readings captured alongside the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    /// Surface pressure in hPa
    #[serde(
        default,
        rename = "pressure",
        deserialize_with = "optional_positive"
    )]
    pub pressure_hpa: Option<f64>,
    /// Relative humidity in percent; `0` means not recorded
    #[serde(
        default,
        rename = "humidity",
        deserialize_with = "optional_positive"
    )]
    pub humidity_percent: Option<f64>,
    /// Air temperature in Celsius
    #[serde(
        default,
        rename = "temperature",
        deserialize_with = "optional_finite"
    )]
    pub temperature_celsius: Option<f64>,
}

/// One journal entry per calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHealthRecord {
    /// Calendar day the entry describes
    #[serde(deserialize_with = "flexible_date")]
    pub date: NaiveDate,
    /// Symptoms keyed by joint identifier (see `constants::joints`)
    #[serde(default)]
    pub joint_symptoms: BTreeMap<String, JointSymptoms>,
    /// Whole-body symptoms
    #[serde(default)]
    pub general_symptoms: GeneralSymptoms,
    /// Environmental readings
    #[serde(default)]
    pub environmental: EnvironmentalConditions,
}

impl DailyHealthRecord {
    /// Create an empty record for the given day
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            joint_symptoms: BTreeMap::new(),
            general_symptoms: GeneralSymptoms::default(),
            environmental: EnvironmentalConditions::default(),
        }
    }

    /// Add or replace the symptoms recorded for a joint
    #[must_use]
    pub fn with_joint(mut self, joint_id: impl Into<String>, symptoms: JointSymptoms) -> Self {
        self.joint_symptoms.insert(joint_id.into(), symptoms);
        self
    }

    /// Set the barometric pressure reading
    #[must_use]
    pub const fn with_pressure(mut self, pressure_hpa: f64) -> Self {
        self.environmental.pressure_hpa = Some(pressure_hpa);
        self
    }

    /// Set the relative humidity reading
    #[must_use]
    pub const fn with_humidity(mut self, humidity_percent: f64) -> Self {
        self.environmental.humidity_percent = Some(humidity_percent);
        self
    }

    /// Set the previous night's sleep
    #[must_use]
    pub const fn with_sleep(mut self, sleep: SleepRecord) -> Self {
        self.general_symptoms.sleep = sleep;
        self
    }

    /// Set the physical fatigue level
    #[must_use]
    pub const fn with_physical_fatigue(mut self, level: u8) -> Self {
        self.general_symptoms.fatigue.physical = Some(level);
        self
    }

    /// Set the mood level
    #[must_use]
    pub const fn with_mood(mut self, level: u8) -> Self {
        self.general_symptoms.mood = Some(level);
        self
    }
}
