// ABOUTME: Pearson correlation engine with paired-sample construction and strength bands
// ABOUTME: Degenerate inputs (empty, zero variance) resolve to a coefficient of 0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::{DailyFactor, DerivedDailyMetrics};
use crate::config::analysis::CorrelationConfig;
use serde::{Deserialize, Serialize};

/// Qualitative band of a correlation coefficient's magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    /// `|r|` below the weak band
    None,
    /// Weak relationship
    Weak,
    /// Moderate relationship
    Moderate,
    /// Strong relationship
    Strong,
}

impl CorrelationStrength {
    /// Classify `|r|` with the default bands (0.7 / 0.5 / 0.3)
    #[must_use]
    pub fn classify(r: f64) -> Self {
        Self::classify_with(r, &CorrelationConfig::default())
    }

    /// Classify `|r|` with configured bands
    #[must_use]
    pub fn classify_with(r: f64, bands: &CorrelationConfig) -> Self {
        let magnitude = r.abs();
        if magnitude >= bands.strong_threshold {
            Self::Strong
        } else if magnitude >= bands.moderate_threshold {
            Self::Moderate
        } else if magnitude >= bands.weak_threshold {
            Self::Weak
        } else {
            Self::None
        }
    }

    /// Lowercase label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "no",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

/// Correlation between a factor and a symptom over paired days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Explanatory factor (e.g., pressure)
    pub factor: DailyFactor,
    /// Symptom or outcome (e.g., pain)
    pub symptom: DailyFactor,
    /// Pearson coefficient in [-1, 1]
    pub coefficient: f64,
    /// Band of `|coefficient|`
    pub strength: CorrelationStrength,
    /// Days where both values were recorded
    pub sample_size: usize,
}

impl CorrelationResult {
    /// Whether the factor and the symptom move in opposite directions
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient < 0.0
    }
}

/// Statistical helpers over daily series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Pearson product-moment correlation (two-pass)
    ///
    /// Returns 0 for empty input or when either series has zero variance.
    /// Both series must have the same length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: sample counts are small
    pub fn correlate(xs: &[f64], ys: &[f64]) -> f64 {
        debug_assert_eq!(xs.len(), ys.len(), "correlate requires paired series");
        if xs.is_empty() || xs.len() != ys.len() {
            return 0.0;
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (covariance, variance_x, variance_y) = xs.iter().zip(ys).fold(
            (0.0, 0.0, 0.0),
            |(cov, var_x, var_y), (x, y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (dx.mul_add(dy, cov), dx.mul_add(dx, var_x), dy.mul_add(dy, var_y))
            },
        );

        let denominator = (variance_x * variance_y).sqrt();
        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }

        (covariance / denominator).clamp(-1.0, 1.0)
    }

    /// Index-aligned samples of two factors, skipping days where either is missing
    #[must_use]
    pub fn paired_samples(
        days: &[DerivedDailyMetrics],
        x: DailyFactor,
        y: DailyFactor,
    ) -> (Vec<f64>, Vec<f64>) {
        days.iter()
            .filter_map(|day| Some((x.value(day)?, y.value(day)?)))
            .unzip()
    }

    /// Correlate two factors over the days where both are recorded
    ///
    /// Returns `None` when no day has both values.
    #[must_use]
    pub fn correlate_factors(
        days: &[DerivedDailyMetrics],
        factor: DailyFactor,
        symptom: DailyFactor,
        bands: &CorrelationConfig,
    ) -> Option<CorrelationResult> {
        let (xs, ys) = Self::paired_samples(days, factor, symptom);
        if xs.is_empty() {
            return None;
        }

        let coefficient = Self::correlate(&xs, &ys);
        Some(CorrelationResult {
            factor,
            symptom,
            coefficient,
            strength: CorrelationStrength::classify_with(coefficient, bands),
            sample_size: xs.len(),
        })
    }

    /// Arithmetic mean, 0 for an empty slice
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: sample counts are small
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }
}
