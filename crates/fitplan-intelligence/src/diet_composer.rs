// ABOUTME: Diet composer selecting one meal per slot and normalising the day to exact macro targets
// ABOUTME: Strategy, focus points, and supplements come from goal-keyed lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Diet Composer
//!
//! For each fixed slot (breakfast, lunch, snack, dinner) one meal is picked
//! from the `(slot, diet)` partition, filtered by diet and allergies, and
//! given a goal-specific purpose line. The meals are then run through the
//! macro normalizer so their calories and protein sum to the targets.
//!
//! A slot with no eligible meal is left out and explained in `notes`; the
//! remaining slots still sum exactly. No eligible meal at all yields the
//! empty diet.

use crate::classifier::MealCatalog;
use crate::config::EngineConfig;
use crate::normalizer::normalize_meals;
use crate::plan_tables::{diet_strategy, focus_points, meal_purposes, supplements, DIET_DISCLAIMER};
use crate::selector::{diet_filter, select_items};
use crate::target_calculator::calculate_macro_targets;
use chrono::Utc;
use fitplan_core::models::{
    DietPlan, FoodItem, Goal, MealEntry, MealSlot, RecentHistory, UserProfile,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{info, warn};

fn meal_entry<R: Rng + ?Sized>(
    item: &FoodItem,
    slot: MealSlot,
    goal: Goal,
    rng: &mut R,
) -> MealEntry {
    let purpose = meal_purposes(goal, slot)
        .choose(rng)
        .copied()
        .unwrap_or_default();
    MealEntry {
        id: item.id.clone(),
        name: item.name.clone(),
        purpose: purpose.to_owned(),
        diet: item.diet,
        calories: item.calories,
        protein_g: item.protein_g,
        carbs_g: item.carbs_g,
        fat_g: item.fat_g,
    }
}

/// Compose a diet from a meal catalog
///
/// Never fails. Whenever at least one meal is selected, the meals' calories
/// and protein sum exactly to `macro_targets`.
pub fn compose_diet<R: Rng + ?Sized>(
    profile: &UserProfile,
    history: &RecentHistory,
    catalog: &MealCatalog,
    config: &EngineConfig,
    rng: &mut R,
) -> DietPlan {
    let partition = profile.diet_type.meal_partition();
    let targets = calculate_macro_targets(profile, &config.energy);
    let filter = diet_filter(partition, &profile.allergies);

    let mut meals = BTreeMap::new();
    let mut notes = Vec::new();
    for slot in MealSlot::ALL {
        let selection = select_items(catalog.bucket(slot, partition), &filter, history, 1, rng);
        let Some(item) = selection.items.first() else {
            warn!(
                slot = %slot,
                diet = profile.diet_type.label(),
                "No eligible meal for slot"
            );
            notes.push(format!(
                "No {} option fits a {} diet with your allergies",
                slot.label().to_lowercase(),
                profile.diet_type.label().to_lowercase()
            ));
            continue;
        };
        if selection.repeats_used > 0 {
            notes.push(format!("{} repeats a recent meal", slot.label()));
        }
        meals.insert(slot, meal_entry(item, slot, profile.goal, rng));
    }

    let (meals, _report) = normalize_meals(&meals, targets, config.diet.normalizer_tolerance);
    if meals.is_empty() {
        notes.push("No meals in the catalog match this diet type and allergy list".to_owned());
    }

    let plan = DietPlan {
        summary: format!(
            "{} {} plan: {} kcal and {} g protein across {} meals",
            profile.diet_type.label(),
            profile.goal.label().to_lowercase(),
            targets.calories,
            targets.protein_g,
            meals.len()
        ),
        goal: profile.goal,
        diet_type: profile.diet_type,
        strategy: diet_strategy(profile.goal),
        macro_targets: targets,
        meals,
        focus_points: focus_points(profile.goal),
        supplements: supplements(profile.goal),
        disclaimer: DIET_DISCLAIMER.to_owned(),
        notes,
        generated_at: Utc::now(),
    };
    info!(
        goal = %plan.goal,
        diet = plan.diet_type.label(),
        meals = plan.meals.len(),
        calories = plan.macro_targets.calories,
        protein_g = plan.macro_targets.protein_g,
        "Composed diet"
    );
    plan
}
