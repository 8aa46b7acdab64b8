// ABOUTME: Plan generation engine turning a profile and catalog into a workout or a diet
// ABOUTME: Synchronous and deterministic given an injected RNG; holds no state between calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Components, leaf first:
//!
//! - [`classifier`]: flat exercise catalog into movement buckets, foods into `(slot, diet)` partitions
//! - [`target_calculator`]: daily calorie and protein targets from a profile
//! - [`selector`]: N items passing a filter, preferring ones not recently used
//! - [`normalizer`]: rescales selected meals so calories and protein hit the targets exactly
//! - [`workout_composer`]: category recipe, selection, and sets/reps/rest annotation
//! - [`diet_composer`]: one meal per slot, normalisation, and goal-keyed strategy text
//!
//! Randomness always comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator makes every plan reproducible.

/// Catalog classification into buckets and meal partitions
pub mod classifier;
/// Engine configuration with environment overrides
pub mod config;
/// Daily diet composition
pub mod diet_composer;
/// Built-in meal catalog
pub mod meal_catalog;
/// Macro normalisation to exact targets
pub mod normalizer;
/// Static text tables keyed by goal
pub mod plan_tables;
/// Repeat-avoiding item selection
pub mod selector;
/// Energy and protein target calculation
pub mod target_calculator;
/// Daily workout composition
pub mod workout_composer;

pub use classifier::{classify_exercise, classify_exercises, ExerciseBuckets, MealCatalog};
pub use config::{ConfigError, EngineConfig};
pub use diet_composer::compose_diet;
pub use meal_catalog::{builtin_food_items, builtin_meal_catalog};
pub use normalizer::{normalize_meals, residual_slot, NormalizationReport};
pub use selector::{diet_filter, equipment_filter, select_items, Selection};
pub use target_calculator::{
    calculate_bmr, calculate_energy_breakdown, calculate_macro_targets, BodyMetrics,
    EnergyBreakdown,
};
pub use workout_composer::{compose_workout, recipe_for, resolve_category, RecipeSlot};
