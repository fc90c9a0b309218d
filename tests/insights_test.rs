// ABOUTME: Integration tests for insight and recommendation formatting rules
// ABOUTME: Each qualifying result must yield exactly one insight or recommendation of the right priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use arthro_intelligence::correlation_analysis::{CorrelationSet, MedicationAnalysis};
use arthro_intelligence::insights::{Findings, RecommendationType};
use arthro_intelligence::pattern_detection::PatternDetector;
use arthro_intelligence::trend_analysis::{MonthlyAverage, MonthlyTrend, TrendMetric};
use arthro_intelligence::trigger_detection::{
    TriggerAnalysis, TriggerEvidence, TriggerFactor, TriggerKind, TriggerSeverity,
};
use arthro_intelligence::{
    AnalysisConfig, CorrelationResult, CorrelationStrength, DailyFactor, InsightFormatter,
    InsightType, Priority,
};
use chrono::Weekday;
use common::{date, derive, pain_series};
use std::collections::BTreeMap;

fn formatter() -> InsightFormatter {
    InsightFormatter::new(&AnalysisConfig::default())
}

fn correlation(factor: DailyFactor, symptom: DailyFactor, coefficient: f64) -> CorrelationResult {
    CorrelationResult {
        factor,
        symptom,
        coefficient,
        strength: CorrelationStrength::classify(coefficient),
        sample_size: 20,
    }
}

fn set(entries: Vec<(&str, CorrelationResult)>) -> CorrelationSet {
    CorrelationSet {
        correlations: entries
            .into_iter()
            .map(|(name, result)| (name.to_owned(), result))
            .collect::<BTreeMap<_, _>>(),
        data_count: 20,
    }
}

fn months(values: &[f64]) -> Vec<MonthlyAverage> {
    values
        .iter()
        .enumerate()
        .map(|(i, average)| MonthlyAverage {
            month: format!("2025-{:02}", i + 3),
            average: *average,
            sample_count: 28,
        })
        .collect()
}

#[test]
fn test_weather_correlations_above_threshold_yield_one_insight_each() {
    let mut findings = Findings::default();
    formatter().weather(
        &set(vec![
            (
                "pressure_pain",
                correlation(DailyFactor::Pressure, DailyFactor::Pain, -0.65),
            ),
            (
                "humidity_pain",
                correlation(DailyFactor::Humidity, DailyFactor::Pain, 0.2),
            ),
        ]),
        &mut findings,
    );

    assert_eq!(findings.insights.len(), 1);
    let insight = &findings.insights[0];
    assert_eq!(insight.insight_type, InsightType::Correlation);
    assert_eq!(insight.severity, Priority::Medium);
    assert!(insight.message.starts_with("Moderate negative correlation"));
    assert_eq!(insight.data["name"], "pressure_pain");

    assert_eq!(findings.recommendations.len(), 1);
    assert_eq!(
        findings.recommendations[0].recommendation_type,
        RecommendationType::Weather
    );
    assert_eq!(findings.recommendations[0].priority, Priority::High);
}

#[test]
fn test_strong_correlation_is_high_severity() {
    let mut findings = Findings::default();
    formatter().weather(
        &set(vec![(
            "humidity_swelling",
            correlation(DailyFactor::Humidity, DailyFactor::Swelling, 0.82),
        )]),
        &mut findings,
    );

    assert_eq!(findings.insights.len(), 1);
    assert_eq!(findings.insights[0].severity, Priority::High);
    assert!(findings.recommendations.is_empty());
}

#[test]
fn test_sleep_recommendation_requires_negative_quality_correlation() {
    let mut helpful = Findings::default();
    formatter().sleep(
        &set(vec![(
            "quality_pain",
            correlation(DailyFactor::SleepQuality, DailyFactor::Pain, -0.6),
        )]),
        &mut helpful,
    );
    assert_eq!(helpful.insights.len(), 1);
    assert_eq!(helpful.recommendations.len(), 1);
    assert_eq!(
        helpful.recommendations[0].recommendation_type,
        RecommendationType::Sleep
    );

    let mut unexpected = Findings::default();
    formatter().sleep(
        &set(vec![(
            "quality_pain",
            correlation(DailyFactor::SleepQuality, DailyFactor::Pain, 0.6),
        )]),
        &mut unexpected,
    );
    assert_eq!(unexpected.insights.len(), 1);
    assert!(unexpected.recommendations.is_empty());
}

#[test]
fn test_low_adherence_yields_one_warning() {
    let analysis = MedicationAnalysis {
        correlations: set(vec![(
            "adherence_pain",
            correlation(DailyFactor::Adherence, DailyFactor::Pain, -0.55),
        )]),
        average_adherence: 0.6,
        days_with_doses: 12,
    };

    let mut findings = Findings::default();
    formatter().medication(&analysis, &mut findings);

    let warnings: Vec<_> = findings
        .insights
        .iter()
        .filter(|i| i.insight_type == InsightType::AdherenceWarning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Medication adherence is 60.0%, below the 80% target.");

    let correlation_insight = findings
        .insights
        .iter()
        .find(|i| i.insight_type == InsightType::Correlation)
        .unwrap();
    assert!(correlation_insight.message.ends_with("Taking doses as scheduled may help."));

    assert_eq!(findings.recommendations.len(), 1);
    assert_eq!(findings.recommendations[0].priority, Priority::Medium);
}

#[test]
fn test_no_adherence_warning_without_scheduled_doses() {
    let analysis = MedicationAnalysis {
        correlations: set(vec![]),
        average_adherence: 0.0,
        days_with_doses: 0,
    };
    let mut findings = Findings::default();
    formatter().medication(&analysis, &mut findings);
    assert!(findings.insights.is_empty());
    assert!(findings.recommendations.is_empty());
}

fn swelling_analysis(coefficient: f64) -> MedicationAnalysis {
    MedicationAnalysis {
        correlations: set(vec![(
            "adherence_swelling",
            correlation(DailyFactor::Adherence, DailyFactor::Swelling, coefficient),
        )]),
        average_adherence: 0.9,
        days_with_doses: 20,
    }
}

#[test]
fn test_moderate_adherence_swelling_yields_inflammation_insight() {
    let mut findings = Findings::default();
    formatter().medication(&swelling_analysis(-0.45), &mut findings);

    assert_eq!(findings.insights.len(), 1);
    let insight = &findings.insights[0];
    assert_eq!(insight.insight_type, InsightType::MedicationInflammation);
    assert_eq!(insight.severity, Priority::Medium);
    assert_eq!(
        insight.message,
        "Taking medication as scheduled goes with less swelling (r = -0.45)."
    );
    assert!(findings.recommendations.is_empty());
}

#[test]
fn test_inflammation_insight_boundaries() {
    // At the threshold itself nothing is reported
    let mut findings = Findings::default();
    formatter().medication(&swelling_analysis(-0.4), &mut findings);
    assert!(findings.insights.is_empty());

    // A strong correlation is reported once, as a correlation insight
    let mut findings = Findings::default();
    formatter().medication(&swelling_analysis(-0.6), &mut findings);
    assert_eq!(findings.insights.len(), 1);
    assert_eq!(findings.insights[0].insight_type, InsightType::Correlation);

    // Positive correlations never suggest an anti-inflammatory effect
    let mut findings = Findings::default();
    formatter().medication(&swelling_analysis(0.45), &mut findings);
    assert!(findings.insights.is_empty());
}

#[test]
fn test_weekly_peak_yields_insight_and_recommendation() {
    let pains = [2, 2, 2, 5, 2, 2, 2, 2, 2, 2, 4, 2, 2, 2];
    let days = derive(&pain_series(date(2025, 6, 1), &pains));
    let pattern = PatternDetector::weekly_pattern(&days, 14)
        .complete()
        .cloned()
        .unwrap();
    assert_eq!(pattern.peak_pain_day, Some(Weekday::Wed));

    let mut findings = Findings::default();
    formatter().weekly(&pattern, &mut findings);
    assert_eq!(findings.insights.len(), 1);
    assert_eq!(findings.insights[0].insight_type, InsightType::WeeklyPattern);
    assert!(findings.insights[0].message.starts_with("Pain is highest on Wednesdays"));
    assert_eq!(findings.recommendations.len(), 1);
    assert_eq!(
        findings.recommendations[0].recommendation_type,
        RecommendationType::WeeklyPlanning
    );
}

#[test]
fn test_flat_week_yields_nothing() {
    let days = derive(&pain_series(date(2025, 6, 1), &[3; 14]));
    let pattern = PatternDetector::weekly_pattern(&days, 14)
        .complete()
        .cloned()
        .unwrap();

    let mut findings = Findings::default();
    formatter().weekly(&pattern, &mut findings);
    assert!(findings.insights.is_empty());
    assert!(findings.recommendations.is_empty());
}

#[test]
fn test_monthly_trend_rules() {
    let trends = vec![
        MonthlyTrend::from_monthly_averages(TrendMetric::Pain, months(&[2.0, 2.5, 3.0])),
        MonthlyTrend::from_monthly_averages(TrendMetric::Fatigue, months(&[3.0, 3.1])),
        MonthlyTrend::from_monthly_averages(TrendMetric::Mood, months(&[4.0])),
    ];

    let mut findings = Findings::default();
    formatter().monthly(&trends, &mut findings);

    // Mood has a single month and is skipped
    assert_eq!(findings.insights.len(), 2);
    assert_eq!(findings.insights[0].severity, Priority::Medium);
    assert_eq!(
        findings.insights[0].message,
        "Pain has risen 50.0% over the last 3 months."
    );
    assert_eq!(findings.insights[1].severity, Priority::Low);
    assert!(findings.insights[1].message.starts_with("Fatigue has been stable"));

    assert_eq!(findings.recommendations.len(), 1);
    assert_eq!(
        findings.recommendations[0].recommendation_type,
        RecommendationType::Trend
    );
    assert_eq!(findings.recommendations[0].priority, Priority::High);
}

#[test]
fn test_each_trigger_yields_one_insight_and_one_recommendation() {
    let analysis = TriggerAnalysis {
        pain_threshold: 4.0,
        high_cohort_size: 8,
        low_cohort_size: 22,
        triggers: vec![
            TriggerFactor {
                kind: TriggerKind::WeatherPressure,
                severity: TriggerSeverity::High,
                evidence: TriggerEvidence::CohortAverages {
                    high_cohort_average: 996.25,
                    low_cohort_average: 1_015.0,
                    difference: -18.75,
                },
            },
            TriggerFactor {
                kind: TriggerKind::DayOfWeek,
                severity: TriggerSeverity::Medium,
                evidence: TriggerEvidence::WeekdayShare {
                    weekday: Weekday::Mon,
                    occurrences: 3,
                    share: 0.375,
                },
            },
        ],
    };

    let mut findings = Findings::default();
    InsightFormatter::triggers(&analysis, &mut findings);

    assert_eq!(findings.insights.len(), 2);
    assert_eq!(findings.recommendations.len(), 2);
    assert_eq!(findings.insights[0].severity, Priority::High);
    assert_eq!(findings.recommendations[0].priority, Priority::High);
    assert!(findings.insights[0].message.contains("18.8 hPa lower"));
    assert_eq!(findings.insights[1].severity, Priority::Medium);
    assert_eq!(
        findings.insights[1].message,
        "38% of high-pain days fall on a Monday."
    );
    assert_eq!(findings.insights[1].data["kind"], "day_of_week");
    assert_eq!(
        findings.recommendations[1].message,
        "Take extra care on Mondays: plan preventive care and a lighter workload for that day."
    );
    assert_eq!(findings.recommendations[1].priority, Priority::Medium);
}
