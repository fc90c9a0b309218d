// ABOUTME: Analysis outcome wrapper distinguishing computed results from insufficient data
// ABOUTME: Minimum-data shortfalls are values callers match on, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Result of an analysis that enforces a minimum record count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum AnalysisOutcome<T> {
    /// The analysis ran
    Complete(T),
    /// Fewer records than the analysis needs
    InsufficientData {
        /// Records the analysis needs
        required: usize,
        /// Records that were supplied
        available: usize,
    },
}

impl<T> AnalysisOutcome<T> {
    /// Run `analyze` only when `available` meets `required`
    pub fn gate(required: usize, available: usize, analyze: impl FnOnce() -> T) -> Self {
        if available < required {
            Self::InsufficientData {
                required,
                available,
            }
        } else {
            Self::Complete(analyze())
        }
    }

    /// Borrow the computed result, if any
    #[must_use]
    pub const fn complete(&self) -> Option<&T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::InsufficientData { .. } => None,
        }
    }

    /// Whether the analysis ran
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Transform the computed result, keeping an insufficient-data marker as is
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisOutcome<U> {
        match self {
            Self::Complete(value) => AnalysisOutcome::Complete(f(value)),
            Self::InsufficientData {
                required,
                available,
            } => AnalysisOutcome::InsufficientData {
                required,
                available,
            },
        }
    }
}
