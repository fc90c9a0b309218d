// ABOUTME: Weather context configuration for pressure-drop alerts
// ABOUTME: Configures alert thresholds, lookback window, and two-tier duplicate suppression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Pressure-drop alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherContextConfig {
    /// Drop (hPa, positive) at or beyond which an alert is raised
    pub pressure_drop_alert_hpa: f64,
    /// Drop (hPa, positive) at or beyond which the alert is high severity
    pub pressure_drop_high_hpa: f64,
    /// Minutes of history compared against the current reading
    pub lookback_minutes: i64,
    /// History readings required before any comparison
    pub min_history_readings: usize,
    /// Previous alerts younger than this suppress similar changes
    pub duplicate_window_minutes: i64,
    /// Change difference (hPa) treated as similar within the duplicate window
    pub duplicate_tolerance_hpa: f64,
    /// Previous alerts younger than this suppress changes within the wider tolerance
    pub strict_duplicate_window_minutes: i64,
    /// Change difference (hPa) treated as similar within the strict window
    pub strict_duplicate_tolerance_hpa: f64,
}

impl Default for WeatherContextConfig {
    fn default() -> Self {
        Self {
            pressure_drop_alert_hpa: 3.0,
            pressure_drop_high_hpa: 5.0,
            lookback_minutes: 180,
            min_history_readings: 2,
            duplicate_window_minutes: 60,
            duplicate_tolerance_hpa: 1.0,
            strict_duplicate_window_minutes: 30,
            strict_duplicate_tolerance_hpa: 2.0,
        }
    }
}
