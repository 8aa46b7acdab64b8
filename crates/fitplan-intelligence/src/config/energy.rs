// ABOUTME: Energy and protein target configuration for the target calculator
// ABOUTME: BMR coefficients, activity factors, goal adjustments, protein coefficients, profile defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Energy Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use fitplan_core::constants::{energy, profile_defaults};
use fitplan_core::models::{ExperienceLevel, Goal};
use serde::{Deserialize, Serialize};

/// Target calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Resting energy equation
    pub bmr: BmrConfig,
    /// TDEE multipliers by experience level
    pub activity_factors: ActivityFactorsConfig,
    /// Flat kcal adjustment by goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Protein g/kg by goal
    pub protein: ProteinConfig,
    /// Defaults and plausible ranges for profile numbers
    pub profile_defaults: ProfileDefaultsConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
    /// Minimum BMR before the activity factor is applied
    pub floor_kcal: f64,
}

/// Activity factors keyed by experience level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Beginner: 1.4
    pub beginner: f64,
    /// Intermediate: 1.6
    pub intermediate: f64,
    /// Advanced: 1.75
    pub advanced: f64,
    /// Unrecognised level: 1.55
    pub default: f64,
}

impl ActivityFactorsConfig {
    /// Factor for a level
    #[must_use]
    pub const fn for_level(&self, level: ExperienceLevel) -> f64 {
        match level {
            ExperienceLevel::Beginner => self.beginner,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
            ExperienceLevel::Unspecified => self.default,
        }
    }
}

/// Flat calorie adjustments by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Muscle gain surplus (+350)
    pub muscle_gain_kcal: f64,
    /// Weight loss deficit (-400)
    pub weight_loss_kcal: f64,
    /// Strength surplus (+200)
    pub strength_kcal: f64,
    /// General fitness (0)
    pub general_kcal: f64,
}

impl GoalAdjustmentsConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> f64 {
        match goal {
            Goal::MuscleGain => self.muscle_gain_kcal,
            Goal::WeightLoss => self.weight_loss_kcal,
            Goal::Strength => self.strength_kcal,
            Goal::GeneralFitness => self.general_kcal,
        }
    }
}

/// Protein coefficients in g per kg body weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Muscle gain (2.0)
    pub muscle_gain_g_per_kg: f64,
    /// Strength (1.8)
    pub strength_g_per_kg: f64,
    /// Weight loss (2.2)
    pub weight_loss_g_per_kg: f64,
    /// General fitness (1.6)
    pub general_g_per_kg: f64,
}

impl ProteinConfig {
    /// Coefficient for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> f64 {
        match goal {
            Goal::MuscleGain => self.muscle_gain_g_per_kg,
            Goal::Strength => self.strength_g_per_kg,
            Goal::WeightLoss => self.weight_loss_g_per_kg,
            Goal::GeneralFitness => self.general_g_per_kg,
        }
    }
}

/// Profile defaults and the ranges outside which input counts as garbage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Default weight (kg)
    pub weight_kg: f64,
    /// Default height (cm)
    pub height_cm: f64,
    /// Default age (years)
    pub age_years: f64,
    /// Accepted weight range
    pub weight_range_kg: (f64, f64),
    /// Accepted height range
    pub height_range_cm: (f64, f64),
    /// Accepted age range
    pub age_range_years: (f64, f64),
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: energy::MSJ_WEIGHT_COEF,
            msj_height_coef: energy::MSJ_HEIGHT_COEF,
            msj_age_coef: energy::MSJ_AGE_COEF,
            msj_male_constant: energy::MSJ_MALE_CONSTANT,
            msj_female_constant: energy::MSJ_FEMALE_CONSTANT,
            floor_kcal: energy::BMR_FLOOR_KCAL,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            beginner: energy::ACTIVITY_FACTOR_BEGINNER,
            intermediate: energy::ACTIVITY_FACTOR_INTERMEDIATE,
            advanced: energy::ACTIVITY_FACTOR_ADVANCED,
            default: energy::ACTIVITY_FACTOR_DEFAULT,
        }
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            muscle_gain_kcal: energy::MUSCLE_GAIN_SURPLUS_KCAL,
            weight_loss_kcal: energy::WEIGHT_LOSS_DEFICIT_KCAL,
            strength_kcal: energy::STRENGTH_SURPLUS_KCAL,
            general_kcal: 0.0,
        }
    }
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            muscle_gain_g_per_kg: energy::PROTEIN_MUSCLE_GAIN_G_PER_KG,
            strength_g_per_kg: energy::PROTEIN_STRENGTH_G_PER_KG,
            weight_loss_g_per_kg: energy::PROTEIN_WEIGHT_LOSS_G_PER_KG,
            general_g_per_kg: energy::PROTEIN_GENERAL_G_PER_KG,
        }
    }
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            weight_kg: profile_defaults::WEIGHT_KG,
            height_cm: profile_defaults::HEIGHT_CM,
            age_years: profile_defaults::AGE_YEARS,
            weight_range_kg: profile_defaults::WEIGHT_RANGE_KG,
            height_range_cm: profile_defaults::HEIGHT_RANGE_CM,
            age_range_years: profile_defaults::AGE_RANGE_YEARS,
        }
    }
}
