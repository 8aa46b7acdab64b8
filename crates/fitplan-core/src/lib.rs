// ABOUTME: Core types and constants for the fitplan plan generation engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate shared by the plan engine and its facade. It holds the
//! types that cross crate boundaries and changes rarely.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: profile defaults, energy equation coefficients, workout annotation values
//! - **models**: user profile, catalog items, repeat-avoidance history, and plan objects

/// Unified error handling with stable error codes
pub mod errors;

/// Domain constants used to build engine configuration defaults
pub mod constants;

/// Profile, catalog, history, and plan data models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
