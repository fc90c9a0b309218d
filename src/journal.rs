// ABOUTME: Loads journal exports (daily records and medication logs) from JSON files
// ABOUTME: Maps missing files and malformed payloads to AppError codes at the crate boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use arthro_core::errors::{AppError, AppResult};
use arthro_core::models::{DailyHealthRecord, MedicationLogEntry};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON array of daily health records
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, `StorageError` for
/// other I/O failures, and `SerializationError` when the JSON is malformed
pub fn read_records(path: impl AsRef<Path>) -> AppResult<Vec<DailyHealthRecord>> {
    read_array(path.as_ref(), "records")
}

/// Read a JSON array of medication log entries
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, `StorageError` for
/// other I/O failures, and `SerializationError` when the JSON is malformed
pub fn read_medication_logs(path: impl AsRef<Path>) -> AppResult<Vec<MedicationLogEntry>> {
    read_array(path.as_ref(), "medication logs")
}

fn read_array<T: DeserializeOwned>(path: &Path, kind: &str) -> AppResult<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(json!({ "path": path.display().to_string() }))
    })?;

    let items: Vec<T> = serde_json::from_str(&contents).map_err(|e| {
        AppError::from(e).with_details(json!({
            "path": path.display().to_string(),
            "expected": format!("JSON array of {kind}"),
        }))
    })?;

    debug!(path = %path.display(), count = items.len(), kind, "Loaded journal export");
    Ok(items)
}
