// ABOUTME: Engine configuration tests for FITPLAN_* environment overrides and validation
// ABOUTME: Serialised with serial_test because overrides are read from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan::config::{ConfigError, EngineConfig};
use fitplan::errors::{AppError, ErrorCode};
use fitplan::models::RepRange;
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 6] = [
    "FITPLAN_ACTIVITY_FACTOR_DEFAULT",
    "FITPLAN_WORKOUT_SETS",
    "FITPLAN_NORMALIZER_TOLERANCE",
    "FITPLAN_HISTORY_CAPACITY",
    "FITPLAN_ACTIVITY_FACTOR_BEGINNER",
    "FITPLAN_BMR_FLOOR_KCAL",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_are_valid() {
    common::init_test_logging();
    clear_overrides();
    let config = EngineConfig::load().unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.history_capacity, 50);
    assert_eq!(config.workout.sets, 3);
    assert!((config.diet.normalizer_tolerance - 0.02).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("FITPLAN_ACTIVITY_FACTOR_DEFAULT", "1.5");
    env::set_var("FITPLAN_WORKOUT_SETS", " 4 ");
    env::set_var("FITPLAN_NORMALIZER_TOLERANCE", "0.05");
    env::set_var("FITPLAN_HISTORY_CAPACITY", "20");

    let config = EngineConfig::load().unwrap();
    clear_overrides();

    assert!((config.energy.activity_factors.default - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.workout.sets, 4);
    assert!((config.diet.normalizer_tolerance - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.history_capacity, 20);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    clear_overrides();
    env::set_var("FITPLAN_WORKOUT_SETS", "three");
    let result = EngineConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("FITPLAN_WORKOUT_SETS")));
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_override_failing_validation_is_an_error() {
    clear_overrides();
    env::set_var("FITPLAN_ACTIVITY_FACTOR_BEGINNER", "1.9");
    let result = EngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_non_finite_or_oversized_factor_is_rejected() {
    for value in ["NaN", "inf", "40", "0.5"] {
        clear_overrides();
        env::set_var("FITPLAN_ACTIVITY_FACTOR_DEFAULT", value);
        let result = EngineConfig::load();
        clear_overrides();

        assert!(
            matches!(result, Err(ConfigError::ValueOutOfRange(_))),
            "default factor {value} was accepted"
        );
    }

    env::set_var("FITPLAN_BMR_FLOOR_KCAL", "NaN");
    let result = EngineConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = EngineConfig::default();
    config.diet.normalizer_tolerance = 0.9;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = EngineConfig::default();
    config.energy.activity_factors.intermediate = 1.3;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.workout.hypertrophy_reps = RepRange { min: 12, max: 8 };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.energy.bmr.floor_kcal = 0.0;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.energy.protein.weight_loss_g_per_kg = 5.0;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.energy.bmr.msj_age_coef = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = EngineConfig::default();
    config.energy.goal_adjustments.muscle_gain_kcal = f64::INFINITY;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = EngineConfig::default();
    config.diet.normalizer_tolerance = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert!(back.validate().is_ok());
    assert_eq!(back.workout.hypertrophy_reps, config.workout.hypertrophy_reps);
    assert_eq!(back.history_capacity, config.history_capacity);
}
