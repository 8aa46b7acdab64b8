// ABOUTME: Domain constants for profile defaults, energy formulas, and plan composition
// ABOUTME: Pure data grouped by domain; engine configuration defaults are built from these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants organised by domain.
//!
//! Engine configuration starts from these values and may override them from
//! the environment; nothing here is read directly by the composers.

/// Defaults applied when a profile field is missing or implausible
pub mod profile_defaults {
    /// Body weight used when none (or garbage) is supplied
    pub const WEIGHT_KG: f64 = 70.0;
    /// Height used when none (or garbage) is supplied
    pub const HEIGHT_CM: f64 = 170.0;
    /// Age used when none (or garbage) is supplied
    pub const AGE_YEARS: f64 = 25.0;

    /// Plausible weight range; values outside fall back to the default
    pub const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 300.0);
    /// Plausible height range
    pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
    /// Age range the Mifflin-St Jeor equation is validated for
    pub const AGE_RANGE_YEARS: (f64, f64) = (10.0, 120.0);
}

/// Mifflin-St Jeor resting energy equation
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *Am J Clin Nutr*, 51(2), 241-247.
pub mod energy {
    /// kcal per kg body weight
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm height
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Male offset
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Female offset
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;
    /// Floor applied to BMR before the activity factor
    pub const BMR_FLOOR_KCAL: f64 = 1000.0;

    /// Activity multipliers keyed by experience level
    pub const ACTIVITY_FACTOR_BEGINNER: f64 = 1.4;
    /// Intermediate trainees
    pub const ACTIVITY_FACTOR_INTERMEDIATE: f64 = 1.6;
    /// Advanced trainees
    pub const ACTIVITY_FACTOR_ADVANCED: f64 = 1.75;
    /// Unrecognised level
    pub const ACTIVITY_FACTOR_DEFAULT: f64 = 1.55;

    /// Flat kcal adjustments by goal
    pub const MUSCLE_GAIN_SURPLUS_KCAL: f64 = 350.0;
    /// Deficit for weight loss
    pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = -400.0;
    /// Surplus for strength
    pub const STRENGTH_SURPLUS_KCAL: f64 = 200.0;

    /// Protein coefficients in g per kg body weight
    pub const PROTEIN_MUSCLE_GAIN_G_PER_KG: f64 = 2.0;
    /// Strength
    pub const PROTEIN_STRENGTH_G_PER_KG: f64 = 1.8;
    /// Weight loss (muscle preservation in a deficit)
    pub const PROTEIN_WEIGHT_LOSS_G_PER_KG: f64 = 2.2;
    /// Everything else
    pub const PROTEIN_GENERAL_G_PER_KG: f64 = 1.6;
}

/// Workout annotation constants
pub mod workout {
    /// Sets per exercise
    pub const SETS_PER_EXERCISE: u8 = 3;
    /// Rep range for hypertrophy work
    pub const HYPERTROPHY_REPS: (u8, u8) = (8, 12);
    /// Rep range for everything else
    pub const ENDURANCE_REPS: (u8, u8) = (12, 15);
    /// Rest between sets
    pub const REST_SECONDS: u16 = 60;
    /// Time budget per exercise
    pub const MINUTES_PER_EXERCISE: u16 = 5;
    /// Fixed warm-up plus cool-down allowance
    pub const WARMUP_COOLDOWN_MINUTES: u16 = 10;
}

/// Diet normalisation constants
pub mod diet {
    /// Relative deviation tolerated before rescaling
    pub const NORMALIZER_TOLERANCE: f64 = 0.02;
}

/// Repeat-avoidance history
pub mod history {
    /// Names remembered by default
    pub const DEFAULT_CAPACITY: usize = 50;
}
