// ABOUTME: Insight and recommendation formatting from numeric analysis results
// ABOUTME: Every result that crosses its threshold yields exactly one insight or recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight and recommendation formatting.
//!
//! The formatter is a pure mapping from analyzer output to value objects.
//! Rules:
//!
//! - each correlation with `|r|` at or above the insight threshold yields one
//!   insight (high when strong, medium otherwise)
//! - pressure/pain, sleep-quality/pain, and adherence/pain correlations past
//!   the recommendation threshold each yield one recommendation
//! - a negative adherence/swelling correlation past the inflammation threshold
//!   but below the insight threshold yields one medication-inflammation insight
//! - low average adherence yields one warning insight
//! - a weekly pain peak clearly above the weekly mean yields one insight and
//!   one recommendation
//! - each monthly trend with enough months yields one insight, and a sharply
//!   worsening trend also yields a high-priority recommendation
//! - each detected trigger yields one insight and one recommendation

use crate::aggregator::DailyFactor;
use crate::config::analysis::{AnalysisConfig, FormatterConfig, TrendConfig, WeeklyConfig};
use crate::correlation_analysis::{CorrelationSet, MedicationAnalysis};
use crate::pattern_detection::WeeklyPattern;
use crate::statistical_analysis::{CorrelationResult, CorrelationStrength};
use crate::trend_analysis::{MonthlyTrend, TrendDirection, TrendMetric};
use crate::trigger_detection::{
    TriggerAnalysis, TriggerEvidence, TriggerFactor, TriggerKind, TriggerSeverity,
};
use arthro_core::constants::WEEKDAY_NAMES;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Severity of an insight or priority of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational
    Low,
    /// Worth attention
    Medium,
    /// Act on this
    High,
}

/// Categories of insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// A factor moves together with a symptom
    Correlation,
    /// Medication adherence goes with less swelling
    MedicationInflammation,
    /// Medication adherence is low
    AdherenceWarning,
    /// Symptoms peak on one weekday
    WeeklyPattern,
    /// A metric changed month over month
    MonthlyTrend,
    /// A factor differs between high- and low-symptom days
    Trigger,
}

/// Categories of recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Prepare for pressure changes
    Weather,
    /// Improve sleep
    Sleep,
    /// Keep to the medication schedule
    Medication,
    /// Plan around a difficult weekday
    WeeklyPlanning,
    /// Discuss a worsening trend
    Trend,
    /// Manage a detected trigger
    Trigger,
}

/// An observation drawn from the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Type of insight
    pub insight_type: InsightType,
    /// Severity
    pub severity: Priority,
    /// Human-readable insight message
    pub message: String,
    /// Supporting numbers
    pub data: serde_json::Value,
}

/// An action suggested by the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Type of recommendation
    pub recommendation_type: RecommendationType,
    /// Priority
    pub priority: Priority,
    /// Human-readable recommendation
    pub message: String,
    /// Supporting numbers
    pub data: serde_json::Value,
}

/// Insights and recommendations collected from one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    /// Insights
    pub insights: Vec<Insight>,
    /// Recommendations
    pub recommendations: Vec<Recommendation>,
}

impl Findings {
    fn insight(
        &mut self,
        insight_type: InsightType,
        severity: Priority,
        message: String,
        data: serde_json::Value,
    ) {
        self.insights.push(Insight {
            insight_type,
            severity,
            message,
            data,
        });
    }

    fn recommend(
        &mut self,
        recommendation_type: RecommendationType,
        priority: Priority,
        message: &str,
        data: serde_json::Value,
    ) {
        self.recommendations.push(Recommendation {
            recommendation_type,
            priority,
            message: message.to_owned(),
            data,
        });
    }
}

/// Maps analyzer output to insights and recommendations
pub struct InsightFormatter {
    rules: FormatterConfig,
    weekly: WeeklyConfig,
    trend: TrendConfig,
}

impl InsightFormatter {
    /// Create a formatter using the relevant configuration sections
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            rules: config.formatter.clone(),
            weekly: config.weekly.clone(),
            trend: config.trend.clone(),
        }
    }

    /// Correlation insights plus the pressure recommendation
    pub fn weather(&self, set: &CorrelationSet, findings: &mut Findings) {
        self.correlation_insights(set, findings);

        if let Some(pressure_pain) = set.correlations.get("pressure_pain") {
            if pressure_pain.coefficient.abs() >= self.rules.recommendation_correlation_threshold {
                findings.recommend(
                    RecommendationType::Weather,
                    Priority::High,
                    "Your pain tracks barometric pressure. Check the forecast and plan lighter days \
                     and joint protection ahead of pressure changes.",
                    json!({ "correlation": pressure_pain.coefficient }),
                );
            }
        }
    }

    /// Correlation insights plus the sleep-quality recommendation
    pub fn sleep(&self, set: &CorrelationSet, findings: &mut Findings) {
        self.correlation_insights(set, findings);

        if let Some(quality_pain) = set.correlations.get("quality_pain") {
            if quality_pain.coefficient <= -self.rules.recommendation_correlation_threshold {
                findings.recommend(
                    RecommendationType::Sleep,
                    Priority::High,
                    "Better sleep goes with less pain for you. Keep a regular bedtime and a \
                     comfortable, joint-friendly sleeping position.",
                    json!({ "correlation": quality_pain.coefficient }),
                );
            }
        }
    }

    /// Correlation insights, the inflammation insight, the adherence
    /// recommendation, and the adherence warning
    pub fn medication(&self, analysis: &MedicationAnalysis, findings: &mut Findings) {
        self.correlation_insights(&analysis.correlations, findings);

        // Stronger correlations already have a correlation insight
        if let Some(adherence_swelling) = analysis.correlations.correlations.get("adherence_swelling")
        {
            let r = adherence_swelling.coefficient;
            if r < -self.rules.inflammation_correlation_threshold
                && r.abs() < self.rules.insight_correlation_threshold
            {
                findings.insight(
                    InsightType::MedicationInflammation,
                    Priority::Medium,
                    format!(
                        "Taking medication as scheduled goes with less swelling (r = {r:.2})."
                    ),
                    json!({
                        "name": "adherence_swelling",
                        "correlation": r,
                        "sample_size": adherence_swelling.sample_size,
                    }),
                );
            }
        }

        if let Some(adherence_pain) = analysis.correlations.correlations.get("adherence_pain") {
            if adherence_pain.coefficient <= -self.rules.recommendation_correlation_threshold {
                findings.recommend(
                    RecommendationType::Medication,
                    Priority::Medium,
                    "Days when you take every scheduled dose are less painful. Reminders can help \
                     keep to the schedule.",
                    json!({ "correlation": adherence_pain.coefficient }),
                );
            }
        }

        if analysis.days_with_doses > 0
            && analysis.average_adherence < self.rules.adherence_warning_rate
        {
            findings.insight(
                InsightType::AdherenceWarning,
                Priority::Medium,
                format!(
                    "Medication adherence is {:.1}%, below the {:.0}% target.",
                    analysis.average_adherence * 100.0,
                    self.rules.adherence_warning_rate * 100.0
                ),
                json!({
                    "average_adherence": analysis.average_adherence,
                    "days_with_doses": analysis.days_with_doses,
                }),
            );
        }
    }

    /// Weekly peak insight and recommendation
    pub fn weekly(&self, pattern: &WeeklyPattern, findings: &mut Findings) {
        let Some(peak) = pattern.peak() else {
            return;
        };
        let margin = peak.pain - pattern.mean_pain;
        if margin < self.weekly.peak_margin_points {
            return;
        }

        let data = json!({
            "weekday": peak.day_name,
            "average_pain": peak.pain,
            "weekly_mean_pain": pattern.mean_pain,
            "days": peak.data_count,
        });
        findings.insight(
            InsightType::WeeklyPattern,
            Priority::Medium,
            format!(
                "Pain is highest on {}s (average {:.1} against a weekly mean of {:.1}).",
                peak.day_name, peak.pain, pattern.mean_pain
            ),
            data.clone(),
        );
        findings.recommend(
            RecommendationType::WeeklyPlanning,
            Priority::Medium,
            "Plan lighter activities and extra rest on your most painful weekday.",
            data,
        );
    }

    /// Monthly trend insights and worsening-trend recommendations
    pub fn monthly(&self, trends: &[MonthlyTrend], findings: &mut Findings) {
        for trend in trends {
            if trend.months.len() < self.trend.minimum_months {
                continue;
            }

            let worsening = trend.is_worsening();
            let data = json!({
                "metric": trend.metric,
                "trend": trend.trend,
                "change_rate_percent": trend.change_rate_percent,
                "months": trend.months.len(),
            });

            findings.insight(
                InsightType::MonthlyTrend,
                if worsening {
                    Priority::Medium
                } else {
                    Priority::Low
                },
                Self::trend_message(trend),
                data.clone(),
            );

            if worsening && trend.change_rate_percent.abs() > self.rules.trend_recommendation_percent
            {
                findings.recommend(
                    RecommendationType::Trend,
                    Priority::High,
                    "A symptom has worsened sharply over recent months. Consider reviewing your \
                     treatment plan with your doctor.",
                    data,
                );
            }
        }
    }

    /// One insight and one recommendation per detected trigger
    pub fn triggers(analysis: &TriggerAnalysis, findings: &mut Findings) {
        for trigger in &analysis.triggers {
            let severity = match trigger.severity {
                TriggerSeverity::High => Priority::High,
                TriggerSeverity::Medium => Priority::Medium,
            };
            let data = serde_json::to_value(trigger).unwrap_or_default();

            findings.insight(
                InsightType::Trigger,
                severity,
                Self::trigger_message(trigger),
                data.clone(),
            );
            findings.recommend(
                RecommendationType::Trigger,
                severity,
                &Self::trigger_advice(trigger),
                data,
            );
        }
    }

    fn correlation_insights(&self, set: &CorrelationSet, findings: &mut Findings) {
        for (name, result) in &set.correlations {
            if result.coefficient.abs() < self.rules.insight_correlation_threshold {
                continue;
            }
            findings.insight(
                InsightType::Correlation,
                if result.strength == CorrelationStrength::Strong {
                    Priority::High
                } else {
                    Priority::Medium
                },
                Self::correlation_message(result),
                json!({
                    "name": name,
                    "correlation": result.coefficient,
                    "strength": result.strength,
                    "sample_size": result.sample_size,
                }),
            );
        }
    }

    fn correlation_message(result: &CorrelationResult) -> String {
        let direction = if result.is_negative() { "falls" } else { "rises" };
        let mut message = format!(
            "{} {} correlation between {} and {} (r = {:.2}): {} tends to rise as {} {}.",
            capitalize(result.strength.label()),
            if result.is_negative() {
                "negative"
            } else {
                "positive"
            },
            result.factor.label(),
            result.symptom.label(),
            result.coefficient,
            result.symptom.label(),
            result.factor.label(),
            direction,
        );
        if result.factor == DailyFactor::Adherence && result.is_negative() {
            message.push_str(" Taking doses as scheduled may help.");
        }
        message
    }

    fn trend_message(trend: &MonthlyTrend) -> String {
        let metric = match trend.metric {
            TrendMetric::Pain => "Pain",
            TrendMetric::Fatigue => "Fatigue",
            TrendMetric::Mood => "Mood",
        };
        match trend.trend {
            TrendDirection::Stable => format!(
                "{metric} has been stable over the last {} months ({:+.1}%).",
                trend.months.len(),
                trend.change_rate_percent
            ),
            TrendDirection::Increasing | TrendDirection::Decreasing => format!(
                "{metric} has {} {:.1}% over the last {} months.",
                if trend.trend == TrendDirection::Increasing {
                    "risen"
                } else {
                    "fallen"
                },
                trend.change_rate_percent.abs(),
                trend.months.len()
            ),
        }
    }

    fn trigger_message(trigger: &TriggerFactor) -> String {
        match (&trigger.kind, &trigger.evidence) {
            (
                TriggerKind::WeatherPressure,
                TriggerEvidence::CohortAverages {
                    difference,
                    high_cohort_average,
                    ..
                },
            ) => format!(
                "Pressure on high-pain days averages {high_cohort_average:.1} hPa, \
                 {:.1} hPa {} than on other days.",
                difference.abs(),
                if *difference < 0.0 { "lower" } else { "higher" }
            ),
            (
                TriggerKind::SleepDuration,
                TriggerEvidence::CohortAverages {
                    difference,
                    high_cohort_average,
                    ..
                },
            ) => format!(
                "You slept {high_cohort_average:.1} hours on average before high-pain days, \
                 {:.1} hours {} than before other days.",
                difference.abs(),
                if *difference < 0.0 { "less" } else { "more" }
            ),
            (_, TriggerEvidence::WeekdayShare { weekday, share, .. }) => format!(
                "{:.0}% of high-pain days fall on a {}.",
                share * 100.0,
                weekday_name(*weekday)
            ),
            (kind, TriggerEvidence::CohortAverages { difference, .. }) => {
                format!("{kind:?} differs by {difference:.1} on high-pain days.")
            }
        }
    }

    fn trigger_advice(trigger: &TriggerFactor) -> String {
        match (trigger.kind, &trigger.evidence) {
            (TriggerKind::WeatherPressure, _) => {
                "Watch the pressure forecast and keep joints warm and rested when it changes."
                    .to_owned()
            }
            (TriggerKind::SleepDuration, _) => {
                "Sleep length differs before high-pain days. Aim for a consistent sleep schedule."
                    .to_owned()
            }
            (TriggerKind::DayOfWeek, TriggerEvidence::WeekdayShare { weekday, .. }) => format!(
                "Take extra care on {}s: plan preventive care and a lighter workload for that day.",
                weekday_name(*weekday)
            ),
            (TriggerKind::DayOfWeek, TriggerEvidence::CohortAverages { .. }) => {
                "High-pain days cluster on one weekday. Review that day's routine and workload."
                    .to_owned()
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES
        .get(weekday.num_days_from_sunday() as usize)
        .copied()
        .unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
