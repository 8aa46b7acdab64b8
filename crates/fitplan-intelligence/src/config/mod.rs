// ABOUTME: Engine configuration: defaults, FITPLAN_* environment overrides, and validation
// ABOUTME: Provides a lazily loaded process-wide instance plus explicit construction for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Engine Configuration Module
//!
//! Every tunable number the engine uses lives here. Engine functions take
//! `&EngineConfig` explicitly; [`EngineConfig::global`] exists for callers
//! that want the environment-driven instance without threading it through.
//!
//! # Module Structure
//!
//! - `energy` - BMR equation, activity factors, goal adjustments, protein coefficients
//! - `workout` - sets, rep ranges, rest, duration estimates
//! - `diet` - macro normalizer tolerance

pub mod diet;
pub mod energy;
pub mod error;
pub mod workout;

pub use diet::DietConfig;
pub use energy::{
    ActivityFactorsConfig, BmrConfig, EnergyConfig, GoalAdjustmentsConfig, ProfileDefaultsConfig,
    ProteinConfig,
};
pub use error::ConfigError;
pub use workout::WorkoutConfig;

use fitplan_core::constants::history;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Target calculator settings
    pub energy: EnergyConfig,
    /// Workout composer settings
    pub workout: WorkoutConfig,
    /// Diet composer settings
    pub diet: DietConfig,
    /// Default capacity for repeat-avoidance histories
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            energy: EnergyConfig::default(),
            workout: WorkoutConfig::default(),
            diet: DietConfig::default(),
            history_capacity: history::DEFAULT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load engine config, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_energy(&self.energy)?;

        let workout = &self.workout;
        if workout.sets == 0 {
            return Err(ConfigError::ValueOutOfRange("Sets per exercise must be at least 1"));
        }
        for reps in [workout.hypertrophy_reps, workout.standard_reps] {
            if reps.min == 0 || reps.min > reps.max {
                return Err(ConfigError::InvalidRange("Rep ranges must satisfy 0 < min <= max"));
            }
        }
        if workout.minutes_per_exercise == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minutes per exercise must be at least 1",
            ));
        }

        if !(0.0..=0.5).contains(&self.diet.normalizer_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "Normalizer tolerance must be between 0.0 and 0.5",
            ));
        }

        Ok(())
    }

    /// Validate the target calculator settings
    fn validate_energy(energy: &EnergyConfig) -> Result<(), ConfigError> {
        let bmr = &energy.bmr;
        let coefficients = [
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
        ];
        if !coefficients.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange("BMR coefficients must be finite"));
        }
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if !bmr.floor_kcal.is_finite() || bmr.floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("BMR floor must be positive"));
        }

        let factors = &energy.activity_factors;
        let all_factors = [
            factors.beginner,
            factors.intermediate,
            factors.advanced,
            factors.default,
        ];
        if !all_factors.into_iter().all(|factor| (1.0..=2.5).contains(&factor)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.beginner >= factors.intermediate || factors.intermediate >= factors.advanced {
            return Err(ConfigError::InvalidRange(
                "Activity factors must ascend from beginner to advanced",
            ));
        }

        let adjustments = &energy.goal_adjustments;
        let all_adjustments = [
            adjustments.muscle_gain_kcal,
            adjustments.weight_loss_kcal,
            adjustments.strength_kcal,
            adjustments.general_kcal,
        ];
        if !all_adjustments.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange("Goal adjustments must be finite"));
        }

        let protein = &energy.protein;
        for coef in [
            protein.muscle_gain_g_per_kg,
            protein.strength_g_per_kg,
            protein.weight_loss_g_per_kg,
            protein.general_g_per_kg,
        ] {
            if !(0.5..=3.0).contains(&coef) {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein coefficients must be between 0.5 and 3.0 g/kg",
                ));
            }
        }

        let defaults = &energy.profile_defaults;
        let in_range = |value: f64, (lo, hi): (f64, f64)| lo < hi && (lo..=hi).contains(&value);
        if !in_range(defaults.weight_kg, defaults.weight_range_kg)
            || !in_range(defaults.height_cm, defaults.height_range_cm)
            || !in_range(defaults.age_years, defaults.age_range_years)
        {
            return Err(ConfigError::InvalidRange(
                "Profile defaults must lie inside their accepted ranges",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `FITPLAN_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("FITPLAN_BMR_FLOOR_KCAL", &mut self.energy.bmr.floor_kcal)?;

        let factors = &mut self.energy.activity_factors;
        Self::apply_env_var("FITPLAN_ACTIVITY_FACTOR_BEGINNER", &mut factors.beginner)?;
        Self::apply_env_var("FITPLAN_ACTIVITY_FACTOR_INTERMEDIATE", &mut factors.intermediate)?;
        Self::apply_env_var("FITPLAN_ACTIVITY_FACTOR_ADVANCED", &mut factors.advanced)?;
        Self::apply_env_var("FITPLAN_ACTIVITY_FACTOR_DEFAULT", &mut factors.default)?;

        let workout = &mut self.workout;
        Self::apply_env_var("FITPLAN_WORKOUT_SETS", &mut workout.sets)?;
        Self::apply_env_var("FITPLAN_WORKOUT_REST_SECONDS", &mut workout.rest_seconds)?;
        Self::apply_env_var("FITPLAN_MINUTES_PER_EXERCISE", &mut workout.minutes_per_exercise)?;
        Self::apply_env_var(
            "FITPLAN_WARMUP_COOLDOWN_MINUTES",
            &mut workout.warmup_cooldown_minutes,
        )?;

        Self::apply_env_var(
            "FITPLAN_NORMALIZER_TOLERANCE",
            &mut self.diet.normalizer_tolerance,
        )?;
        Self::apply_env_var("FITPLAN_HISTORY_CAPACITY", &mut self.history_capacity)?;

        Ok(self)
    }
}
