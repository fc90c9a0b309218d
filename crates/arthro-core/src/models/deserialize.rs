// ABOUTME: Tolerant serde deserializers for journal exports
// ABOUTME: Accepts dates with or without time, numeric flags, and nullable severity levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::symptom_scales::{LEVEL_MAX, SLEEP_INTERRUPTIONS_MAX};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Accepts both simple dates ("2025-11-26") and ISO 8601 datetimes ("2025-11-26T08:00:00Z")
pub(crate) fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(de::Error::custom(format!(
        "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
    )))
}

/// Raw numeric value as found in exports (integer, float, or null)
fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
}

/// Severity level where `0` and null both mean "not recorded"; clamped to `0..=LEVEL_MAX`
pub(crate) fn severity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.map_or(0, |value| clamp_to(value, LEVEL_MAX)))
}

/// Optional level where `0` and null both mean "not recorded"; clamped to `1..=LEVEL_MAX`
pub(crate) fn optional_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?
        .map(|value| clamp_to(value, LEVEL_MAX))
        .filter(|level| *level > 0))
}

/// Optional awakening count where `0` is a real observation
pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.map(|value| clamp_to(value, SLEEP_INTERRUPTIONS_MAX)))
}

/// Optional measurement where non-finite or non-positive readings are not recorded
pub(crate) fn optional_positive<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.filter(|value| value.is_finite() && *value > 0.0))
}

/// Optional measurement where only non-finite readings are dropped
pub(crate) fn optional_finite<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.filter(|value| value.is_finite()))
}

/// Taken flag stored as `0`/`1` or as a boolean
pub(crate) fn taken_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => Ok(value),
        Some(Flag::Number(value)) => Ok(value == 1),
        None => Ok(false),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped to 0..=max
fn clamp_to(value: f64, max: u8) -> u8 {
    if value.is_finite() {
        value.round().clamp(0.0, f64::from(max)) as u8
    } else {
        0
    }
}
