// ABOUTME: Diet plan output model: macro targets, meal entries, strategy, and supplements
// ABOUTME: Meals are keyed by slot in eating order so the JSON body reads top to bottom
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{FoodDiet, MealSlot};
use super::profile::{DietType, Goal};

/// Daily energy and protein targets
///
/// Both values are positive whole numbers for every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily energy target (kcal)
    pub calories: u32,
    /// Daily protein target (grams)
    #[serde(rename = "protein_grams")]
    pub protein_g: u32,
}

/// A selected meal with its (normalised) nutrition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Why this meal sits in this slot for the user's goal
    pub purpose: String,
    /// Diet partition of the underlying food
    pub diet: FoodDiet,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrate (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// Goal-specific nutrition strategy text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietStrategy {
    /// One-line summary of the approach
    pub headline: String,
    /// How calories are budgeted
    pub calorie_approach: String,
    /// How protein is budgeted
    pub protein_approach: String,
    /// When to eat around training
    pub meal_timing: String,
    /// Fluid guidance
    pub hydration: String,
}

/// Explanatory card shown alongside a diet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPoint {
    /// Card title
    pub title: String,
    /// Card body
    pub detail: String,
}

/// Optional supplement suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    /// Supplement name
    pub name: String,
    /// Typical dose
    pub dosage: String,
    /// When to take it
    pub timing: String,
}

/// A composed daily diet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    /// One-line summary
    pub summary: String,
    /// Goal the plan was built for
    pub goal: Goal,
    /// Diet type the plan was built for
    pub diet_type: DietType,
    /// Strategy block
    pub strategy: DietStrategy,
    /// Targets the meals sum to
    pub macro_targets: MacroTargets,
    /// Selected meals by slot
    pub meals: BTreeMap<MealSlot, MealEntry>,
    /// Explanatory cards
    pub focus_points: Vec<FocusPoint>,
    /// Supplement suggestions
    pub supplements: Vec<Supplement>,
    /// Medical disclaimer
    pub disclaimer: String,
    /// Explanations for missing slots or repeats
    pub notes: Vec<String>,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl DietPlan {
    /// Whether no meal could be selected at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Sum of meal calories
    #[must_use]
    pub fn total_calories(&self) -> u32 {
        self.meals.values().map(|m| m.calories).sum()
    }

    /// Sum of meal protein
    #[must_use]
    pub fn total_protein_g(&self) -> u32 {
        self.meals.values().map(|m| m.protein_g).sum()
    }

    /// Names of the selected meals, for the caller's history
    pub fn meal_names(&self) -> impl Iterator<Item = &str> {
        self.meals.values().map(|m| m.name.as_str())
    }
}
