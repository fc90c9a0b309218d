// ABOUTME: Integration tests for loading journal exports from JSON files
// ABOUTME: Covers the journal store shape, medication flags, and error codes for bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arthro_insights::{journal, ErrorCode, LifePatternAnalyzer};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const RECORDS_JSON: &str = r#"[
    {
        "date": "2025-05-01",
        "jointSymptoms": { "knees": { "pain": 4, "swelling": 2 }, "wrists": { "pain": 0 } },
        "generalSymptoms": { "sleep": { "duration": 6.5, "quality": 3 }, "mood": 2 },
        "environmental": { "pressure": 1004.5, "humidity": 81 }
    },
    {
        "date": "2025-05-02T07:30:00Z",
        "jointSymptoms": { "knees": { "pain": 2 } },
        "environmental": { "pressure": 1017.0 }
    }
]"#;

const MEDICATIONS_JSON: &str = r#"[
    { "date": "2025-05-01", "medication_name": "Methotrexate", "taken": 1, "scheduled_time": "08:00" },
    { "date": "2025-05-01", "medication_name": "Folic acid", "taken": 0 },
    { "date": "2025-05-02", "medication_name": "Methotrexate", "taken": true }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_reads_journal_store_shape() {
    let dir = TempDir::new().unwrap();
    let records = journal::read_records(write(&dir, "records.json", RECORDS_JSON)).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].joint_symptoms["knees"].pain, 4);
    assert_eq!(records[0].general_symptoms.sleep.duration_hours, Some(6.5));
    assert_eq!(records[0].environmental.humidity_percent, Some(81.0));
    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
    assert_eq!(records[1].general_symptoms.mood, None);
}

#[test]
fn test_reads_medication_flags() {
    let dir = TempDir::new().unwrap();
    let logs =
        journal::read_medication_logs(write(&dir, "medications.json", MEDICATIONS_JSON)).unwrap();

    assert_eq!(logs.len(), 3);
    assert!(logs[0].taken);
    assert_eq!(logs[0].scheduled_time.as_deref(), Some("08:00"));
    assert!(!logs[1].taken);
    assert!(logs[2].taken);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = journal::read_records(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.details["path"].as_str().unwrap().ends_with("absent.json"));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "records.json", r#"{ "date": "2025-05-01" }"#);
    let error = journal::read_records(path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert_eq!(error.details["expected"], "JSON array of records");
}

#[test]
fn test_loaded_records_feed_the_analyzer() {
    let dir = TempDir::new().unwrap();
    let records = journal::read_records(write(&dir, "records.json", RECORDS_JSON)).unwrap();
    let logs =
        journal::read_medication_logs(write(&dir, "medications.json", MEDICATIONS_JSON)).unwrap();

    let report = LifePatternAnalyzer::default().analyze_as_of(
        &records,
        &logs,
        NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
    );
    assert_eq!(report.data_count, 2);
    assert!(!report.weather.is_complete());
    assert!(report.insights.is_empty());
}
