// ABOUTME: Named weather, sleep, and medication correlation analyses over derived daily metrics
// ABOUTME: Each analysis pairs factors with symptoms and gates on its minimum record count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::{DailyFactor, DerivedDailyMetrics};
use crate::config::analysis::{CorrelationConfig, MinimumDataConfig};
use crate::outcome::AnalysisOutcome;
use crate::statistical_analysis::{CorrelationResult, StatisticalAnalyzer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Named factor/symptom pairs for the weather analysis
pub const WEATHER_CORRELATIONS: [(&str, DailyFactor, DailyFactor); 4] = [
    ("pressure_pain", DailyFactor::Pressure, DailyFactor::Pain),
    ("pressure_stiffness", DailyFactor::Pressure, DailyFactor::Stiffness),
    ("humidity_pain", DailyFactor::Humidity, DailyFactor::Pain),
    ("humidity_swelling", DailyFactor::Humidity, DailyFactor::Swelling),
];

/// Named factor/symptom pairs for the sleep analysis
pub const SLEEP_CORRELATIONS: [(&str, DailyFactor, DailyFactor); 4] = [
    ("duration_pain", DailyFactor::SleepDuration, DailyFactor::Pain),
    ("quality_pain", DailyFactor::SleepQuality, DailyFactor::Pain),
    ("quality_fatigue", DailyFactor::SleepQuality, DailyFactor::Fatigue),
    (
        "interruptions_stiffness",
        DailyFactor::SleepInterruptions,
        DailyFactor::MorningStiffness,
    ),
];

/// Named factor/symptom pairs for the medication analysis
pub const MEDICATION_CORRELATIONS: [(&str, DailyFactor, DailyFactor); 3] = [
    ("adherence_pain", DailyFactor::Adherence, DailyFactor::Pain),
    ("adherence_swelling", DailyFactor::Adherence, DailyFactor::Swelling),
    ("adherence_stiffness", DailyFactor::Adherence, DailyFactor::Stiffness),
];

/// Correlations computed by one named analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSet {
    /// Results keyed by correlation name; pairs with no paired days are absent
    pub correlations: BTreeMap<String, CorrelationResult>,
    /// Days supplied to the analysis
    pub data_count: usize,
}

/// Medication analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationAnalysis {
    /// Adherence correlations
    #[serde(flatten)]
    pub correlations: CorrelationSet,
    /// Mean adherence over all days, counting days with nothing scheduled as 0
    pub average_adherence: f64,
    /// Days with at least one scheduled dose
    pub days_with_doses: usize,
}

/// Named correlation analyses
pub struct CorrelationAnalyzer;

impl CorrelationAnalyzer {
    /// Pressure and humidity against pain, stiffness, and swelling
    #[must_use]
    pub fn weather(
        days: &[DerivedDailyMetrics],
        minimum: &MinimumDataConfig,
        bands: &CorrelationConfig,
    ) -> AnalysisOutcome<CorrelationSet> {
        AnalysisOutcome::gate(minimum.correlation_records, days.len(), || {
            Self::correlation_set(days, &WEATHER_CORRELATIONS, bands)
        })
    }

    /// Sleep duration, quality, and interruptions against pain, fatigue, and morning stiffness
    #[must_use]
    pub fn sleep(
        days: &[DerivedDailyMetrics],
        minimum: &MinimumDataConfig,
        bands: &CorrelationConfig,
    ) -> AnalysisOutcome<CorrelationSet> {
        AnalysisOutcome::gate(minimum.correlation_records, days.len(), || {
            Self::correlation_set(days, &SLEEP_CORRELATIONS, bands)
        })
    }

    /// Medication adherence against pain, swelling, and stiffness
    ///
    /// Needs enough journal days and enough medication log entries; the
    /// insufficient-data marker reports whichever requirement failed first.
    #[must_use]
    pub fn medication(
        days: &[DerivedDailyMetrics],
        medication_log_count: usize,
        minimum: &MinimumDataConfig,
        bands: &CorrelationConfig,
    ) -> AnalysisOutcome<MedicationAnalysis> {
        if days.len() < minimum.correlation_records {
            return AnalysisOutcome::InsufficientData {
                required: minimum.correlation_records,
                available: days.len(),
            };
        }

        AnalysisOutcome::gate(minimum.medication_logs, medication_log_count, || {
            let rates: Vec<f64> = days.iter().map(|day| day.adherence_rate).collect();

            MedicationAnalysis {
                correlations: Self::correlation_set(days, &MEDICATION_CORRELATIONS, bands),
                average_adherence: StatisticalAnalyzer::mean(&rates),
                days_with_doses: days.iter().filter(|day| day.scheduled_doses > 0).count(),
            }
        })
    }

    fn correlation_set(
        days: &[DerivedDailyMetrics],
        pairs: &[(&str, DailyFactor, DailyFactor)],
        bands: &CorrelationConfig,
    ) -> CorrelationSet {
        let correlations: BTreeMap<String, CorrelationResult> = pairs
            .iter()
            .filter_map(|(name, factor, symptom)| {
                StatisticalAnalyzer::correlate_factors(days, *factor, *symptom, bands)
                    .map(|result| ((*name).to_owned(), result))
            })
            .collect();

        debug!(
            days = days.len(),
            computed = correlations.len(),
            requested = pairs.len(),
            "Computed correlation set"
        );

        CorrelationSet {
            correlations,
            data_count: days.len(),
        }
    }
}
