// ABOUTME: Main library entry point for the fitplan workout and diet plan engine
// ABOUTME: Re-exports the core and engine crates and adds logging, catalog loading, and the engine facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Rule-based generation of a daily workout and a calorie-accurate daily
//! diet from a user profile and a catalog snapshot. No model calls, no
//! persistence: every call takes its inputs by value and returns fresh
//! plain data that serializes directly to JSON.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: errors, constants, and the profile, catalog, and plan models
//! - **`fitplan-intelligence`**: target calculator, classifier, selector, normalizer, composers
//! - **this crate**: [`engine`] facade, [`catalog`] JSON loading, [`logging`] setup, and the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::engine::{record_workout, PlanEngine};
//! use fitplan::models::{RecentHistory, UserProfile};
//! use fitplan::config::EngineConfig;
//!
//! # fn main() -> fitplan::errors::AppResult<()> {
//! let catalog = fitplan::catalog::load_exercise_catalog("exercises.json")?;
//! let profile: UserProfile = serde_json::from_str(r#"{"goal": "Muscle Gain"}"#)?;
//! let mut history = RecentHistory::default();
//!
//! let mut engine = PlanEngine::seeded(EngineConfig::default(), 42);
//! let plan = engine.generate_workout(&profile, &history, None, &catalog);
//! record_workout(&mut history, &plan);
//! # Ok(())
//! # }
//! ```

/// JSON loading for catalogs, profiles, and history files
pub mod catalog;

/// Plan engine facade
pub mod engine;

/// Structured logging setup
pub mod logging;

pub use fitplan_core::{constants, errors, models};
pub use fitplan_intelligence::{
    classifier, config, diet_composer, meal_catalog, normalizer, plan_tables, selector,
    target_calculator, workout_composer,
};

pub use engine::{generate_diet, generate_workout, record_diet, record_workout, PlanEngine};
pub use errors::{AppError, AppResult, ErrorCode};
