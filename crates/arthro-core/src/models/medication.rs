// ABOUTME: Medication adherence log entry model
// ABOUTME: One entry per scheduled dose, flagged as taken or missed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::deserialize::{flexible_date, taken_flag};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled dose and whether it was taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationLogEntry {
    /// Day the dose was scheduled for
    #[serde(deserialize_with = "flexible_date")]
    pub date: NaiveDate,
    /// Medication name
    pub medication_name: String,
    /// Whether the dose was taken (stored as 0/1 by the journal)
    #[serde(default, deserialize_with = "taken_flag")]
    pub taken: bool,
    /// Scheduled time of day, as entered (e.g. "08:00")
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl MedicationLogEntry {
    /// Create a log entry for one scheduled dose
    pub fn new(date: NaiveDate, medication_name: impl Into<String>, taken: bool) -> Self {
        Self {
            date,
            medication_name: medication_name.into(),
            taken,
            scheduled_time: None,
        }
    }
}
