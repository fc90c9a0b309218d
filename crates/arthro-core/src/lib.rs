// ABOUTME: Core types and constants for arthritis journal analytics
// ABOUTME: Foundation crate with record models, error handling, and constant lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Arthro Core
//!
//! Foundation crate providing the journal data model shared by the analytics
//! engine and its callers. This crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Joint definitions, symptom scales, and pressure bands
//! - **models**: `DailyHealthRecord`, `MedicationLogEntry`, and joint symptom types

/// Unified error handling system with standard error codes
pub mod errors;

/// Immutable lookup tables (joints, symptom scales, pressure bands)
pub mod constants;

/// Journal data models consumed by the analytics engine
pub mod models;
