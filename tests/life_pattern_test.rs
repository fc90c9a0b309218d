// ABOUTME: End-to-end tests for the full life-pattern analysis pipeline
// ABOUTME: Runs a month of journal records through every analyzer and checks the assembled report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use arthro_intelligence::insights::RecommendationType;
use arthro_intelligence::trigger_detection::{TriggerKind, TriggerSeverity};
use arthro_intelligence::{
    AnalysisConfig, AnalysisOutcome, CorrelationStrength, InsightType, LifePatternAnalyzer,
    Priority,
};
use common::{date, day_after, doses, pain_record, pressure_drop_month};

#[test]
fn test_pressure_drop_month_end_to_end() {
    let records = pressure_drop_month(date(2025, 3, 3));
    let report = LifePatternAnalyzer::default().analyze_as_of(&records, &[], date(2025, 4, 1));

    assert_eq!(report.data_count, 30);
    assert_eq!(report.generated_on, date(2025, 4, 1));

    // Negative, at least moderate, pressure/pain correlation
    let pressure_pain = &report.correlations["pressure_pain"];
    assert!(pressure_pain.is_negative());
    assert!(pressure_pain.strength >= CorrelationStrength::Moderate);
    assert_eq!(pressure_pain.sample_size, 30);

    // High-severity pressure trigger from the high-pain cohort
    let triggers = report.triggers.complete().unwrap();
    assert_eq!(triggers.high_cohort_size, 8);
    let pressure = triggers
        .triggers
        .iter()
        .find(|t| t.kind == TriggerKind::WeatherPressure)
        .unwrap();
    assert_eq!(pressure.severity, TriggerSeverity::High);

    // The trigger and the correlation both surface as findings
    assert!(report
        .insights
        .iter()
        .any(|i| i.insight_type == InsightType::Trigger && i.severity == Priority::High));
    assert!(report
        .insights
        .iter()
        .any(|i| i.insight_type == InsightType::Correlation && i.data["name"] == "pressure_pain"));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.recommendation_type == RecommendationType::Weather));

    // Every analysis that had enough days ran
    assert!(report.weather.is_complete());
    assert!(report.sleep.is_complete());
    assert!(report.weekly_pattern.is_complete());
    assert!(report.monthly_trends.is_complete());
    assert_eq!(
        report.medication,
        AnalysisOutcome::InsufficientData {
            required: 7,
            available: 0
        }
    );
    assert!(!report.correlations.contains_key("duration_pain"));
}

#[test]
fn test_record_order_does_not_change_report() {
    let records = pressure_drop_month(date(2025, 3, 3));
    let mut reversed = records.clone();
    reversed.reverse();

    let analyzer = LifePatternAnalyzer::default();
    let as_of = date(2025, 4, 1);
    assert_eq!(
        analyzer.analyze_as_of(&records, &[], as_of),
        analyzer.analyze_as_of(&reversed, &[], as_of)
    );
}

#[test]
fn test_duplicate_dates_keep_last_record() {
    let mut records = pressure_drop_month(date(2025, 3, 3));
    records.push(pain_record(date(2025, 3, 3), 5));

    let report = LifePatternAnalyzer::default().analyze_as_of(&records, &[], date(2025, 4, 1));
    assert_eq!(report.data_count, 30);
    assert_eq!(report.correlations["pressure_pain"].sample_size, 29);
}

#[test]
fn test_medication_analysis_runs_with_enough_logs() {
    let start = date(2025, 3, 3);
    let records = pressure_drop_month(start);
    let logs: Vec<_> = records
        .iter()
        .flat_map(|record| doses(record.date, 2, 1))
        .collect();

    let report = LifePatternAnalyzer::default().analyze_as_of(&records, &logs, date(2025, 4, 1));
    let medication = report.medication.complete().unwrap();
    assert_eq!(medication.days_with_doses, 30);
    assert!((medication.average_adherence - 0.5).abs() < 1e-12);
    assert!(report
        .insights
        .iter()
        .any(|i| i.insight_type == InsightType::AdherenceWarning));
}

#[test]
fn test_days_without_scheduled_doses_count_as_zero_adherence() {
    let start = date(2025, 5, 5);
    let mut records = Vec::new();
    let mut logs = Vec::new();
    for offset in 0..10 {
        let day = day_after(start, offset);
        if offset % 2 == 0 {
            records.push(pain_record(day, 1));
            logs.extend(doses(day, 2, 2));
        } else {
            records.push(pain_record(day, 5));
        }
    }

    let report = LifePatternAnalyzer::default().analyze_as_of(&records, &logs, date(2025, 5, 14));
    let medication = report.medication.complete().unwrap();

    assert_eq!(medication.days_with_doses, 5);
    assert!((medication.average_adherence - 0.5).abs() < 1e-12);
    let adherence_pain = &medication.correlations.correlations["adherence_pain"];
    assert_eq!(adherence_pain.sample_size, 10);
    assert!((adherence_pain.coefficient + 1.0).abs() < 1e-9);

    assert!(report
        .insights
        .iter()
        .any(|i| i.insight_type == InsightType::AdherenceWarning));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.recommendation_type == RecommendationType::Medication));
}

#[test]
fn test_report_serializes_outcome_status() {
    let records = pressure_drop_month(date(2025, 3, 3));
    let report = LifePatternAnalyzer::new(AnalysisConfig::default()).analyze_as_of(
        &records[..10],
        &[],
        date(2025, 3, 31),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["weather"]["status"], "complete");
    assert_eq!(json["weekly_pattern"]["status"], "insufficient_data");
    assert_eq!(json["weekly_pattern"]["result"]["required"], 14);
    assert_eq!(json["weekly_pattern"]["result"]["available"], 10);
    assert_eq!(json["joint_summary"].as_array().unwrap().len(), 10);
}
