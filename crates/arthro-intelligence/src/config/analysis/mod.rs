// ABOUTME: Analysis configuration container with environment overrides and validation
// ABOUTME: Passed explicitly to analyzers; there is no process-wide configuration instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis configuration.
//!
//! [`AnalysisConfig::default`] reproduces the journal's established rules.
//! [`AnalysisConfig::load`] layers `ARTHRO_*` environment overrides on top and
//! validates the result.

mod error;
mod thresholds;
mod triggers;
mod weather;

pub use error::ConfigError;
pub use thresholds::{
    CorrelationConfig, FormatterConfig, MinimumDataConfig, TrendConfig, WeeklyConfig,
};
pub use triggers::TriggerThresholds;
pub use weather::WeatherContextConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Main analysis configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum record counts per analysis
    pub minimum_data: MinimumDataConfig,
    /// Correlation strength bands
    pub correlation: CorrelationConfig,
    /// Monthly trend window
    pub trend: TrendConfig,
    /// Trigger detection thresholds
    pub triggers: TriggerThresholds,
    /// Weekly pattern reporting
    pub weekly: WeeklyConfig,
    /// Insight and recommendation rules
    pub formatter: FormatterConfig,
    /// Pressure-drop alert settings
    pub weather: WeatherContextConfig,
}

impl AnalysisConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when loading fails
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load analysis config, using defaults");
            Self::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds are out of order or outside their valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_minimum_data()?;
        self.validate_correlation()?;

        let trend = &self.trend;
        if trend.months_analyzed < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend months_analyzed must be at least 2",
            ));
        }
        if trend.minimum_months < 2 || trend.minimum_months > trend.months_analyzed as usize {
            return Err(ConfigError::InvalidRange(
                "trend minimum_months must be between 2 and months_analyzed",
            ));
        }

        if !is_non_negative(self.weekly.peak_margin_points) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly peak_margin_points must be non-negative",
            ));
        }

        self.validate_triggers()?;
        self.validate_formatter()?;
        self.validate_weather()
    }

    fn validate_minimum_data(&self) -> Result<(), ConfigError> {
        let minimum = &self.minimum_data;
        if minimum.correlation_records < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "correlation_records must be at least 2",
            ));
        }
        if minimum.weekly_records == 0 || minimum.trend_records == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weekly_records and trend_records must be positive",
            ));
        }
        if minimum.trigger_records == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trigger_records must be positive",
            ));
        }
        Ok(())
    }

    fn validate_correlation(&self) -> Result<(), ConfigError> {
        let bands = &self.correlation;
        if !(0.0 < bands.weak_threshold
            && bands.weak_threshold < bands.moderate_threshold
            && bands.moderate_threshold < bands.strong_threshold
            && bands.strong_threshold <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "correlation bands must satisfy 0 < weak < moderate < strong <= 1",
            ));
        }
        Ok(())
    }

    fn validate_triggers(&self) -> Result<(), ConfigError> {
        let triggers = &self.triggers;
        if !(triggers.pain_percentile > 0.0 && triggers.pain_percentile <= 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "trigger pain_percentile must be in (0, 100]",
            ));
        }
        if triggers.min_cohort_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trigger min_cohort_days must be positive",
            ));
        }
        if !(triggers.pressure_difference_hpa > 0.0 && triggers.sleep_difference_hours > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "trigger difference thresholds must be positive",
            ));
        }
        if !(triggers.high_severity_multiplier.is_finite()
            && triggers.high_severity_multiplier >= 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "trigger high_severity_multiplier must be at least 1",
            ));
        }
        if !(0.0 < triggers.weekday_share
            && triggers.weekday_share < triggers.weekday_high_share
            && triggers.weekday_high_share <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "trigger weekday shares must satisfy 0 < share < high_share <= 1",
            ));
        }
        Ok(())
    }

    fn validate_formatter(&self) -> Result<(), ConfigError> {
        let formatter = &self.formatter;
        for threshold in [
            formatter.insight_correlation_threshold,
            formatter.recommendation_correlation_threshold,
            formatter.inflammation_correlation_threshold,
        ] {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "formatter correlation thresholds must be in (0, 1]",
                ));
            }
        }
        if !(formatter.adherence_warning_rate > 0.0 && formatter.adherence_warning_rate <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "formatter adherence_warning_rate must be in (0, 1]",
            ));
        }
        if !is_non_negative(formatter.trend_recommendation_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "formatter trend_recommendation_percent must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_weather(&self) -> Result<(), ConfigError> {
        let weather = &self.weather;
        if !(0.0 < weather.pressure_drop_alert_hpa
            && weather.pressure_drop_alert_hpa <= weather.pressure_drop_high_hpa)
        {
            return Err(ConfigError::InvalidRange(
                "pressure drop thresholds must satisfy 0 < alert <= high",
            ));
        }
        if weather.lookback_minutes <= 0
            || weather.duplicate_window_minutes < 0
            || weather.strict_duplicate_window_minutes < 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "weather lookback and duplicate windows must not be negative",
            ));
        }
        if !is_non_negative(weather.duplicate_tolerance_hpa)
            || !is_non_negative(weather.strict_duplicate_tolerance_hpa)
        {
            return Err(ConfigError::ValueOutOfRange(
                "weather duplicate tolerances must be non-negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Minimum data overrides
        Self::apply_env_var(
            "ARTHRO_MIN_CORRELATION_RECORDS",
            &mut self.minimum_data.correlation_records,
        )?;
        Self::apply_env_var(
            "ARTHRO_MIN_MEDICATION_LOGS",
            &mut self.minimum_data.medication_logs,
        )?;
        Self::apply_env_var(
            "ARTHRO_MIN_WEEKLY_RECORDS",
            &mut self.minimum_data.weekly_records,
        )?;
        Self::apply_env_var(
            "ARTHRO_MIN_TREND_RECORDS",
            &mut self.minimum_data.trend_records,
        )?;
        Self::apply_env_var(
            "ARTHRO_MIN_TRIGGER_RECORDS",
            &mut self.minimum_data.trigger_records,
        )?;

        // Trigger overrides
        Self::apply_env_var(
            "ARTHRO_TRIGGER_PAIN_PERCENTILE",
            &mut self.triggers.pain_percentile,
        )?;
        Self::apply_env_var(
            "ARTHRO_TRIGGER_MIN_COHORT_DAYS",
            &mut self.triggers.min_cohort_days,
        )?;
        Self::apply_env_var(
            "ARTHRO_TRIGGER_PRESSURE_HPA",
            &mut self.triggers.pressure_difference_hpa,
        )?;
        Self::apply_env_var(
            "ARTHRO_TRIGGER_SLEEP_HOURS",
            &mut self.triggers.sleep_difference_hours,
        )?;
        Self::apply_env_var(
            "ARTHRO_TRIGGER_WEEKDAY_SHARE",
            &mut self.triggers.weekday_share,
        )?;
        Self::apply_env_var(
            "ARTHRO_TRIGGER_WEEKDAY_HIGH_SHARE",
            &mut self.triggers.weekday_high_share,
        )?;

        // Formatter overrides
        Self::apply_env_var(
            "ARTHRO_INFLAMMATION_CORRELATION_THRESHOLD",
            &mut self.formatter.inflammation_correlation_threshold,
        )?;
        Self::apply_env_var(
            "ARTHRO_ADHERENCE_WARNING_RATE",
            &mut self.formatter.adherence_warning_rate,
        )?;
        Self::apply_env_var(
            "ARTHRO_TREND_RECOMMENDATION_PERCENT",
            &mut self.formatter.trend_recommendation_percent,
        )?;

        // Weather overrides
        Self::apply_env_var(
            "ARTHRO_PRESSURE_DROP_ALERT_HPA",
            &mut self.weather.pressure_drop_alert_hpa,
        )?;
        Self::apply_env_var(
            "ARTHRO_PRESSURE_DROP_HIGH_HPA",
            &mut self.weather.pressure_drop_high_hpa,
        )?;

        Ok(self)
    }
}

/// NaN-rejecting `value >= 0`
fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
