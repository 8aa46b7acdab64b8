// ABOUTME: JSON loading for exercise and food catalogs, profiles, and history files
// ABOUTME: Maps IO and parse failures to AppError so callers see a stable error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Catalog loading
//!
//! The engine performs no I/O. These helpers materialise catalogs from JSON
//! arrays for the CLI and for callers that keep catalogs on disk.

use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use fitplan_core::models::{ExerciseItem, FoodItem, RecentHistory, UserProfile};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> AppResult<T> {
    serde_json::from_str(json)
        .map_err(|e| AppError::serialization(format!("Invalid {what} JSON: {e}")).with_source(e))
}

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::InternalError
        };
        AppError::new(code, format!("Cannot read {}: {e}", path.display())).with_source(e)
    })
}

/// Parse an exercise catalog from a JSON array
///
/// # Errors
///
/// Returns a serialization error if the JSON is malformed
pub fn parse_exercise_catalog(json: &str) -> AppResult<Vec<ExerciseItem>> {
    parse_json(json, "exercise catalog")
}

/// Parse a food catalog from a JSON array
///
/// # Errors
///
/// Returns a serialization error if the JSON is malformed
pub fn parse_food_catalog(json: &str) -> AppResult<Vec<FoodItem>> {
    parse_json(json, "food catalog")
}

/// Load an exercise catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_exercise_catalog(path: impl AsRef<Path>) -> AppResult<Vec<ExerciseItem>> {
    let path = path.as_ref();
    let items = parse_exercise_catalog(&read_file(path)?)?;
    debug!(path = %path.display(), items = items.len(), "Loaded exercise catalog");
    Ok(items)
}

/// Load a food catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_food_catalog(path: impl AsRef<Path>) -> AppResult<Vec<FoodItem>> {
    let path = path.as_ref();
    let items = parse_food_catalog(&read_file(path)?)?;
    debug!(path = %path.display(), items = items.len(), "Loaded food catalog");
    Ok(items)
}

/// Load a user profile file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_profile(path: impl AsRef<Path>) -> AppResult<UserProfile> {
    parse_json(&read_file(path.as_ref())?, "profile")
}

/// Load a history file holding a JSON array of names, oldest first
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_history(path: impl AsRef<Path>, capacity: usize) -> AppResult<RecentHistory> {
    let names: Vec<String> = parse_json(&read_file(path.as_ref())?, "history")?;
    Ok(RecentHistory::from_names(names, capacity))
}
