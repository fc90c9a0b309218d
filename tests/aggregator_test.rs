// ABOUTME: Integration tests for per-day metric aggregation and joint summaries
// ABOUTME: Covers zero-collapse averaging, optional fields, adherence, and body-map ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use arthro_core::constants::joints::Joint;
use arthro_core::models::{DailyHealthRecord, JointSymptoms, SleepRecord};
use arthro_intelligence::{DailyFactor, RecordAggregator};
use chrono::Weekday;
use common::{approx_eq, date, doses, pain_record};

#[test]
fn test_day_without_joint_symptoms_has_zero_pain() {
    let days = RecordAggregator::aggregate(&[DailyHealthRecord::new(date(2025, 6, 2))], &[]);

    assert_eq!(days.len(), 1);
    assert!(approx_eq(days[0].overall_pain, 0.0));
    assert!(approx_eq(days[0].overall_stiffness, 0.0));
    assert_eq!(days[0].weekday, Weekday::Mon);
    assert_eq!(days[0].weekday_index(), 1);
}

#[test]
fn test_all_zero_joints_collapse_to_zero() {
    let record = DailyHealthRecord::new(date(2025, 6, 2))
        .with_joint("knees", JointSymptoms::pain(0))
        .with_joint("hips", JointSymptoms::default());

    let days = RecordAggregator::aggregate(&[record], &[]);
    assert!(approx_eq(days[0].overall_pain, 0.0));
}

#[test]
fn test_overall_levels_average_only_affected_joints() {
    let record = DailyHealthRecord::new(date(2025, 6, 2))
        .with_joint(
            "knees",
            JointSymptoms {
                pain: 5,
                swelling: 2,
                stiffness: 4,
                ..JointSymptoms::default()
            },
        )
        .with_joint("wrists", JointSymptoms::pain(2))
        .with_joint("ankles", JointSymptoms::pain(0));

    let days = RecordAggregator::aggregate(&[record], &[]);
    assert!(approx_eq(days[0].overall_pain, 3.5));
    assert!(approx_eq(days[0].overall_swelling, 2.0));
    assert!(approx_eq(days[0].overall_stiffness, 4.0));
}

#[test]
fn test_optional_fields_stay_absent() {
    let record = pain_record(date(2025, 6, 2), 3)
        .with_sleep(SleepRecord {
            duration_hours: Some(7.5),
            interruptions: Some(0),
            ..SleepRecord::default()
        })
        .with_mood(4);

    let day = &RecordAggregator::aggregate(&[record], &[])[0];
    assert_eq!(day.sleep_duration_hours, Some(7.5));
    assert_eq!(day.sleep_interruptions, Some(0.0));
    assert_eq!(day.sleep_quality, None);
    assert_eq!(day.pressure_hpa, None);
    assert_eq!(day.mood, Some(4.0));
    assert_eq!(DailyFactor::Pressure.value(day), None);
    assert_eq!(DailyFactor::Pain.value(day), Some(3.0));
}

#[test]
fn test_adherence_joins_logs_by_date() {
    let monday = date(2025, 6, 2);
    let tuesday = date(2025, 6, 3);
    let mut logs = doses(monday, 4, 3);
    logs.extend(doses(date(2025, 6, 10), 2, 2));

    let days = RecordAggregator::aggregate(
        &[pain_record(monday, 2), pain_record(tuesday, 2)],
        &logs,
    );

    assert_eq!(days[0].scheduled_doses, 4);
    assert_eq!(days[0].taken_doses, 3);
    assert!(approx_eq(days[0].adherence_rate, 0.75));
    assert_eq!(DailyFactor::Adherence.value(&days[0]), Some(0.75));
    assert_eq!(days[1].scheduled_doses, 0);
    assert_eq!(DailyFactor::Adherence.value(&days[1]), Some(0.0));
}

#[test]
fn test_aggregate_preserves_input_order() {
    let records = vec![
        pain_record(date(2025, 6, 5), 1),
        pain_record(date(2025, 6, 2), 4),
    ];
    let days = RecordAggregator::aggregate(&records, &[]);
    assert_eq!(days[0].date, date(2025, 6, 5));
    assert_eq!(days[1].date, date(2025, 6, 2));
}

#[test]
fn test_joint_summary_follows_body_map_and_ignores_unknown_joints() {
    let records = vec![
        DailyHealthRecord::new(date(2025, 6, 2))
            .with_joint("knees", JointSymptoms::pain(4))
            .with_joint("tail", JointSymptoms::pain(5)),
        DailyHealthRecord::new(date(2025, 6, 3))
            .with_joint("knees", JointSymptoms::pain(2))
            .with_joint("shoulders", JointSymptoms::pain(0)),
    ];

    let summary = RecordAggregator::summarize_joints(&records);
    assert_eq!(summary.len(), 10);
    assert_eq!(summary[0].joint, Joint::Shoulders);
    assert_eq!(summary[0].pain.count, 0);
    assert!(approx_eq(summary[0].pain.average, 0.0));

    let knees = summary.iter().find(|s| s.joint == Joint::Knees).unwrap();
    assert_eq!(knees.pain.total, 6);
    assert_eq!(knees.pain.count, 2);
    assert!(approx_eq(knees.pain.average, 3.0));
    assert_eq!(knees.swelling.count, 0);
}
