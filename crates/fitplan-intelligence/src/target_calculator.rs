// ABOUTME: Daily energy and protein targets from a user profile
// ABOUTME: Mifflin-St Jeor BMR, level-based activity factor, goal adjustment, goal protein coefficient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Target Calculator
//!
//! Turns a profile into [`MacroTargets`]. The calculation never fails: every
//! numeric field is defaulted when missing, non-finite, or implausible.
//!
//! # Formula
//!
//! ```text
//! BMR      = 10 x weight_kg + 6.25 x height_cm - 5 x age + (5 | -161)
//! calories = round(max(BMR, floor) x activity_factor(level) + adjustment(goal))
//! protein  = round(weight_kg x coefficient(goal))
//! ```
//!
//! # Reference
//!
//! Mifflin, M.D., et al. (1990). *Am J Clin Nutr*, 51(2), 241-247.
//! <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{BmrConfig, EnergyConfig, ProfileDefaultsConfig};
use fitplan_core::models::{MacroTargets, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body measurements after defaulting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age_years: f64,
    /// Biological sex
    pub sex: Sex,
}

/// Every intermediate of a target calculation, for display and auditing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Measurements the calculation used
    pub metrics: BodyMetrics,
    /// Resting energy after the floor (kcal)
    pub bmr_kcal: f64,
    /// Multiplier applied to BMR
    pub activity_factor: f64,
    /// BMR x activity factor (kcal)
    pub tdee_kcal: f64,
    /// Flat goal adjustment (kcal)
    pub goal_adjustment_kcal: f64,
    /// Final rounded targets
    pub targets: MacroTargets,
}

/// Replace a missing, non-finite, or out-of-range value with its default
fn sanitize(value: Option<f64>, default: f64, (lo, hi): (f64, f64)) -> f64 {
    match value {
        Some(v) if v.is_finite() && (lo..=hi).contains(&v) => v,
        _ => default,
    }
}

/// Resolve profile measurements against configured defaults
#[must_use]
pub fn resolve_body_metrics(
    profile: &UserProfile,
    defaults: &ProfileDefaultsConfig,
) -> BodyMetrics {
    let metrics = BodyMetrics {
        weight_kg: sanitize(
            profile.body_weight_kg,
            defaults.weight_kg,
            defaults.weight_range_kg,
        ),
        height_cm: sanitize(profile.height_cm, defaults.height_cm, defaults.height_range_cm),
        age_years: sanitize(profile.age, defaults.age_years, defaults.age_range_years),
        sex: profile.sex,
    };
    if profile.body_weight_kg != Some(metrics.weight_kg)
        || profile.height_cm != Some(metrics.height_cm)
        || profile.age != Some(metrics.age_years)
    {
        debug!(
            weight_kg = metrics.weight_kg,
            height_cm = metrics.height_cm,
            age_years = metrics.age_years,
            "Profile measurements defaulted"
        );
    }
    metrics
}

/// Basal metabolic rate by Mifflin-St Jeor, floored at the configured minimum
#[must_use]
pub fn calculate_bmr(metrics: &BodyMetrics, config: &BmrConfig) -> f64 {
    let sex_constant = match metrics.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };
    let bmr = config.msj_age_coef.mul_add(
        metrics.age_years,
        config
            .msj_weight_coef
            .mul_add(metrics.weight_kg, config.msj_height_coef * metrics.height_cm),
    ) + sex_constant;
    bmr.max(config.floor_kcal)
}

/// Full energy calculation with intermediates
#[must_use]
pub fn calculate_energy_breakdown(profile: &UserProfile, config: &EnergyConfig) -> EnergyBreakdown {
    let metrics = resolve_body_metrics(profile, &config.profile_defaults);
    let bmr_kcal = calculate_bmr(&metrics, &config.bmr);
    let activity_factor = config.activity_factors.for_level(profile.experience_level);
    let tdee_kcal = bmr_kcal * activity_factor;
    let goal_adjustment_kcal = config.goal_adjustments.for_goal(profile.goal);

    let calories = (tdee_kcal + goal_adjustment_kcal).round().max(1.0) as u32;
    let protein_g = (metrics.weight_kg * config.protein.for_goal(profile.goal))
        .round()
        .max(1.0) as u32;

    EnergyBreakdown {
        metrics,
        bmr_kcal,
        activity_factor,
        tdee_kcal,
        goal_adjustment_kcal,
        targets: MacroTargets {
            calories,
            protein_g,
        },
    }
}

/// Daily calorie and protein targets for a profile
#[must_use]
pub fn calculate_macro_targets(profile: &UserProfile, config: &EnergyConfig) -> MacroTargets {
    calculate_energy_breakdown(profile, config).targets
}
