// ABOUTME: Journal data models shared by the analytics engine and its callers
// ABOUTME: Re-exports daily health records, joint symptoms, and medication log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Medication adherence log entries
pub mod medication;
/// Daily health records (joint symptoms, general symptoms, environment)
pub mod record;

mod deserialize;

pub use medication::MedicationLogEntry;
pub use record::{
    DailyHealthRecord, EnvironmentalConditions, FatigueLevels, GeneralSymptoms, JointSymptoms,
    SleepRecord, SymptomKind,
};
