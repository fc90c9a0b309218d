// ABOUTME: Immutable lookup tables for joints, symptom scales, and barometric bands
// ABOUTME: Replaces module-wide service singletons with plain constant data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constant tables referenced by the analytics engine.
//!
//! Nothing here carries state; analyzers read these tables directly or take
//! the relevant values through their configuration.

/// Joint definitions for the body map
pub mod joints;

/// Severity scales for recorded symptoms
pub mod symptom_scales {
    /// Upper bound of every severity and level scale; exports are clamped to it
    pub const LEVEL_MAX: u8 = 5;
    /// Upper bound of the pain severity scale
    pub const PAIN_MAX: u8 = 5;
    /// Upper bound of the swelling severity scale
    pub const SWELLING_MAX: u8 = 5;
    /// Upper bound of the stiffness severity scale
    pub const STIFFNESS_MAX: u8 = 5;
    /// Upper bound of the redness severity scale
    pub const REDNESS_MAX: u8 = 3;
    /// Upper bound of the warmth severity scale
    pub const WARMTH_MAX: u8 = 3;
    /// Upper bound of physical and mental fatigue levels
    pub const FATIGUE_MAX: u8 = 5;
    /// Upper bound of the sleep quality level
    pub const SLEEP_QUALITY_MAX: u8 = 5;
    /// Upper bound of the morning stiffness level
    pub const MORNING_STIFFNESS_MAX: u8 = 5;
    /// Shortest sleep duration the journal accepts (hours)
    pub const SLEEP_DURATION_MIN_HOURS: f64 = 1.0;
    /// Longest sleep duration the journal accepts (hours)
    pub const SLEEP_DURATION_MAX_HOURS: f64 = 12.0;
    /// Maximum number of night-time interruptions recorded
    pub const SLEEP_INTERRUPTIONS_MAX: u8 = 10;

    /// Level at or above which a symptom is considered severe
    pub const SEVERE_LEVEL: u8 = 4;
    /// Level at or above which a symptom is considered moderate
    pub const MODERATE_LEVEL: u8 = 3;
    /// Level at or above which a symptom is considered mild
    pub const MILD_LEVEL: u8 = 2;
}

/// Barometric pressure and humidity bands used for weather context
pub mod weather_bands {
    /// Standard sea-level atmosphere (hPa)
    pub const STANDARD_ATMOSPHERE_HPA: f64 = 1013.25;

    /// Lower bound of the "very high" pressure band (hPa)
    pub const VERY_HIGH_PRESSURE_HPA: f64 = 1025.0;
    /// Lower bound of the "high" pressure band (hPa)
    pub const HIGH_PRESSURE_HPA: f64 = 1020.0;
    /// Lower bound of the "normal" pressure band (hPa)
    pub const NORMAL_PRESSURE_HPA: f64 = 1015.0;
    /// Lower bound of the "low" pressure band (hPa)
    pub const LOW_PRESSURE_HPA: f64 = 1010.0;

    /// Below this pressure symptoms are expected to worsen (hPa)
    pub const SYMPTOM_LOW_PRESSURE_HPA: f64 = 1010.0;
    /// Below this pressure symptoms are expected to worsen markedly (hPa)
    pub const SYMPTOM_VERY_LOW_PRESSURE_HPA: f64 = 1000.0;
    /// Above this relative humidity symptoms are expected to worsen (%)
    pub const SYMPTOM_HUMID_PERCENT: f64 = 70.0;
    /// Above this relative humidity symptoms are expected to worsen markedly (%)
    pub const SYMPTOM_VERY_HUMID_PERCENT: f64 = 80.0;
    /// Ceiling of the weather symptom-impact score
    pub const SYMPTOM_IMPACT_MAX_SCORE: u8 = 5;
}

/// Weekday display names, Sunday first (index = days from Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
