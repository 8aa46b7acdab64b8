// ABOUTME: Domain models shared between the plan engine and its callers
// ABOUTME: Profile input, catalog records, repeat history, and plan outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

/// Exercise and food catalog records
pub mod catalog;
/// Diet plan output
pub mod diet;
/// Repeat-avoidance history
pub mod history;
/// User profile and label enums
pub mod profile;
/// Workout plan output
pub mod workout;

pub use catalog::{
    CatalogEntry, EquipmentKind, EquipmentTier, ExerciseItem, FoodDiet, FoodItem, MealSlot,
};
pub use diet::{DietPlan, DietStrategy, FocusPoint, MacroTargets, MealEntry, Supplement};
pub use history::RecentHistory;
pub use profile::{DietType, ExperienceLevel, Goal, Sex, UserProfile};
pub use workout::{
    ExerciseBucket, ExerciseEntry, RepRange, WorkoutCategory, WorkoutPlan,
};
