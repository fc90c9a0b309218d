// ABOUTME: Full life-pattern analysis pipeline producing a single report per run
// ABOUTME: Aggregates once, runs independent analyzers in parallel, then formats findings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::{DerivedDailyMetrics, JointSymptomSummary, RecordAggregator};
use crate::config::analysis::AnalysisConfig;
use crate::correlation_analysis::{CorrelationAnalyzer, CorrelationSet, MedicationAnalysis};
use crate::insights::{Findings, Insight, InsightFormatter, Recommendation};
use crate::outcome::AnalysisOutcome;
use crate::pattern_detection::{PatternDetector, WeeklyPattern};
use crate::statistical_analysis::CorrelationResult;
use crate::trend_analysis::{MonthlyTrend, TrendAnalyzer};
use crate::trigger_detection::{TriggerAnalysis, TriggerDetector};
use arthro_core::models::{DailyHealthRecord, MedicationLogEntry};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Everything one analysis run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePatternReport {
    /// Analysis date; the monthly window ends with this date's month
    pub generated_on: NaiveDate,
    /// Distinct journal days analyzed
    pub data_count: usize,
    /// Every computed correlation, keyed by name
    pub correlations: BTreeMap<String, CorrelationResult>,
    /// Weather correlations
    pub weather: AnalysisOutcome<CorrelationSet>,
    /// Sleep correlations
    pub sleep: AnalysisOutcome<CorrelationSet>,
    /// Medication adherence correlations
    pub medication: AnalysisOutcome<MedicationAnalysis>,
    /// Day-of-week averages
    pub weekly_pattern: AnalysisOutcome<WeeklyPattern>,
    /// Pain, fatigue, and mood trends
    pub monthly_trends: AnalysisOutcome<Vec<MonthlyTrend>>,
    /// Cohort comparison and triggers
    pub triggers: AnalysisOutcome<TriggerAnalysis>,
    /// Per-joint symptom totals
    pub joint_summary: Vec<JointSymptomSummary>,
    /// Insights
    pub insights: Vec<Insight>,
    /// Recommendations
    pub recommendations: Vec<Recommendation>,
}

/// Runs the full analysis pipeline with one configuration
pub struct LifePatternAnalyzer {
    config: AnalysisConfig,
}

impl Default for LifePatternAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl LifePatternAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze records as of today (UTC)
    #[must_use]
    pub fn analyze(
        &self,
        records: &[DailyHealthRecord],
        medication_logs: &[MedicationLogEntry],
    ) -> LifePatternReport {
        self.analyze_as_of(records, medication_logs, Utc::now().date_naive())
    }

    /// Analyze records as of the given date
    ///
    /// Records may arrive in any order. They are sorted by date, and when a
    /// date appears more than once the last record for it is kept.
    #[must_use]
    pub fn analyze_as_of(
        &self,
        records: &[DailyHealthRecord],
        medication_logs: &[MedicationLogEntry],
        as_of: NaiveDate,
    ) -> LifePatternReport {
        let records = Self::normalize(records);
        let days = RecordAggregator::aggregate(&records, medication_logs);
        let cfg = &self.config;

        let ((weather, sleep, medication), (weekly_pattern, (monthly_trends, triggers))) =
            rayon::join(
                || self.correlations(&days, medication_logs.len()),
                || {
                    rayon::join(
                        || PatternDetector::weekly_pattern(&days, cfg.minimum_data.weekly_records),
                        || {
                            rayon::join(
                                || {
                                    TrendAnalyzer::monthly_trends(
                                        &days,
                                        as_of,
                                        cfg.minimum_data.trend_records,
                                        &cfg.trend,
                                    )
                                },
                                || {
                                    TriggerDetector::detect_triggers(
                                        &days,
                                        cfg.minimum_data.trigger_records,
                                        &cfg.triggers,
                                    )
                                },
                            )
                        },
                    )
                },
            );

        let formatter = InsightFormatter::new(cfg);
        let mut findings = Findings::default();
        if let Some(set) = weather.complete() {
            formatter.weather(set, &mut findings);
        }
        if let Some(set) = sleep.complete() {
            formatter.sleep(set, &mut findings);
        }
        if let Some(analysis) = medication.complete() {
            formatter.medication(analysis, &mut findings);
        }
        if let Some(pattern) = weekly_pattern.complete() {
            formatter.weekly(pattern, &mut findings);
        }
        if let Some(trends) = monthly_trends.complete() {
            formatter.monthly(trends, &mut findings);
        }
        if let Some(analysis) = triggers.complete() {
            InsightFormatter::triggers(analysis, &mut findings);
        }

        let correlations: BTreeMap<String, CorrelationResult> =
            [weather.complete(), sleep.complete()]
                .into_iter()
                .flatten()
                .chain(medication.complete().map(|analysis| &analysis.correlations))
                .flat_map(|set| set.correlations.clone())
                .collect();

        info!(
            days = days.len(),
            %as_of,
            correlations = correlations.len(),
            insights = findings.insights.len(),
            recommendations = findings.recommendations.len(),
            "Life pattern analysis complete"
        );

        LifePatternReport {
            generated_on: as_of,
            data_count: days.len(),
            correlations,
            weather,
            sleep,
            medication,
            weekly_pattern,
            monthly_trends,
            triggers,
            joint_summary: RecordAggregator::summarize_joints(&records),
            insights: findings.insights,
            recommendations: findings.recommendations,
        }
    }

    fn correlations(
        &self,
        days: &[DerivedDailyMetrics],
        medication_log_count: usize,
    ) -> (
        AnalysisOutcome<CorrelationSet>,
        AnalysisOutcome<CorrelationSet>,
        AnalysisOutcome<MedicationAnalysis>,
    ) {
        let minimum = &self.config.minimum_data;
        let bands = &self.config.correlation;
        (
            CorrelationAnalyzer::weather(days, minimum, bands),
            CorrelationAnalyzer::sleep(days, minimum, bands),
            CorrelationAnalyzer::medication(days, medication_log_count, minimum, bands),
        )
    }

    /// Sort by date and keep the last record for each date
    fn normalize(records: &[DailyHealthRecord]) -> Vec<DailyHealthRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|record| record.date);

        let mut unique: Vec<DailyHealthRecord> = Vec::with_capacity(sorted.len());
        for record in sorted {
            match unique.last_mut() {
                Some(previous) if previous.date == record.date => {
                    warn!(date = %record.date, "Duplicate journal date, keeping the later record");
                    *previous = record;
                }
                _ => unique.push(record),
            }
        }
        unique
    }
}
