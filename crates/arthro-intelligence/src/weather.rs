// ABOUTME: Barometric pressure context: pressure levels, weather symptom impact, and drop alerts
// ABOUTME: Pure functions; callers own pressure history and the last raised alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::analysis::WeatherContextConfig;
use arthro_core::constants::weather_bands::{
    HIGH_PRESSURE_HPA, LOW_PRESSURE_HPA, NORMAL_PRESSURE_HPA, SYMPTOM_HUMID_PERCENT,
    SYMPTOM_IMPACT_MAX_SCORE, SYMPTOM_LOW_PRESSURE_HPA, SYMPTOM_VERY_HUMID_PERCENT,
    SYMPTOM_VERY_LOW_PRESSURE_HPA, VERY_HIGH_PRESSURE_HPA,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Band of a barometric pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureLevel {
    /// At or above 1025 hPa
    VeryHigh,
    /// 1020-1025 hPa
    High,
    /// 1015-1020 hPa
    Normal,
    /// 1010-1015 hPa
    Low,
    /// Below 1010 hPa
    VeryLow,
}

impl PressureLevel {
    /// Classify a pressure reading
    #[must_use]
    pub fn from_hpa(pressure_hpa: f64) -> Self {
        if pressure_hpa >= VERY_HIGH_PRESSURE_HPA {
            Self::VeryHigh
        } else if pressure_hpa >= HIGH_PRESSURE_HPA {
            Self::High
        } else if pressure_hpa >= NORMAL_PRESSURE_HPA {
            Self::Normal
        } else if pressure_hpa >= LOW_PRESSURE_HPA {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

/// Expected effect of current weather on symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// Score below 2
    Low,
    /// Score 2-3
    Medium,
    /// Score 4 and above
    High,
}

/// Weather condition contributing to the impact score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactFactor {
    /// Pressure below 1000 hPa
    VeryLowPressure,
    /// Pressure below 1010 hPa
    LowPressure,
    /// Humidity above 80 %
    VeryHighHumidity,
    /// Humidity above 70 %
    HighHumidity,
}

/// Symptom impact assessment for one weather observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomImpact {
    /// Impact score, capped at 5
    pub score: u8,
    /// Impact level derived from the score
    pub level: ImpactLevel,
    /// Conditions that raised the score
    pub factors: Vec<ImpactFactor>,
}

impl SymptomImpact {
    /// Score pressure and humidity against the symptom bands
    #[must_use]
    pub fn assess(pressure_hpa: f64, humidity_percent: f64) -> Self {
        let mut score = 0_u8;
        let mut factors = Vec::new();

        if pressure_hpa < SYMPTOM_VERY_LOW_PRESSURE_HPA {
            score += 3;
            factors.push(ImpactFactor::VeryLowPressure);
        } else if pressure_hpa < SYMPTOM_LOW_PRESSURE_HPA {
            score += 2;
            factors.push(ImpactFactor::LowPressure);
        }

        if humidity_percent > SYMPTOM_VERY_HUMID_PERCENT {
            score += 2;
            factors.push(ImpactFactor::VeryHighHumidity);
        } else if humidity_percent > SYMPTOM_HUMID_PERCENT {
            score += 1;
            factors.push(ImpactFactor::HighHumidity);
        }

        let score = score.min(SYMPTOM_IMPACT_MAX_SCORE);
        let level = match score {
            4.. => ImpactLevel::High,
            2..=3 => ImpactLevel::Medium,
            _ => ImpactLevel::Low,
        };

        Self {
            score,
            level,
            factors,
        }
    }
}

/// Timestamped pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Pressure in hPa
    pub pressure_hpa: f64,
}

/// Pressure-drop alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Drop at or beyond the alert threshold
    Medium,
    /// Drop at or beyond the high threshold
    High,
}

/// A rapid pressure drop worth notifying the patient about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDropAlert {
    /// Current reading minus the recent maximum (negative)
    pub change_hpa: f64,
    /// Severity
    pub severity: AlertSeverity,
    /// Current pressure
    pub pressure_hpa: f64,
    /// When the alert was raised
    pub raised_at: DateTime<Utc>,
}

impl PressureDropAlert {
    /// Notification text
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Barometric pressure dropped {:.1} hPa in the last few hours; watch for symptom changes.",
            self.change_hpa.abs()
        )
    }
}

/// Compare the current reading with the recent maximum and raise an alert on a sharp drop
///
/// Returns `None` when history is too short, no reading falls inside the
/// lookback window, the drop is below the alert threshold, or `last_alert`
/// already covers a similar change.
#[must_use]
pub fn detect_pressure_drop(
    history: &[PressureReading],
    current_hpa: f64,
    now: DateTime<Utc>,
    last_alert: Option<&PressureDropAlert>,
    config: &WeatherContextConfig,
) -> Option<PressureDropAlert> {
    if history.len() < config.min_history_readings {
        return None;
    }

    let window_start = now - Duration::minutes(config.lookback_minutes);
    let recent_max = history
        .iter()
        .filter(|reading| reading.recorded_at > window_start)
        .map(|reading| reading.pressure_hpa)
        .reduce(f64::max)?;

    let change_hpa = current_hpa - recent_max;
    if change_hpa > -config.pressure_drop_alert_hpa {
        return None;
    }

    if last_alert.is_some_and(|previous| is_duplicate(previous, change_hpa, now, config)) {
        debug!(change_hpa, "Skipping duplicate pressure alert");
        return None;
    }

    let severity = if change_hpa <= -config.pressure_drop_high_hpa {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    };

    info!(change_hpa, current_hpa, ?severity, "Pressure drop detected");

    Some(PressureDropAlert {
        change_hpa,
        severity,
        pressure_hpa: current_hpa,
        raised_at: now,
    })
}

fn is_duplicate(
    previous: &PressureDropAlert,
    change_hpa: f64,
    now: DateTime<Utc>,
    config: &WeatherContextConfig,
) -> bool {
    let age = now - previous.raised_at;
    let change_difference = (change_hpa - previous.change_hpa).abs();

    (age < Duration::minutes(config.duplicate_window_minutes)
        && change_difference <= config.duplicate_tolerance_hpa)
        || (age < Duration::minutes(config.strict_duplicate_window_minutes)
            && change_difference <= config.strict_duplicate_tolerance_hpa)
}
