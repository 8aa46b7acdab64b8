// ABOUTME: Workout composer turning a profile and classified catalog into a daily workout
// ABOUTME: Resolves a category, fills its bucket recipe through the selector, and annotates each exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Workout Composer
//!
//! Category resolution:
//!
//! | Input                               | Category                     |
//! |-------------------------------------|------------------------------|
//! | explicit override (not `Split`)     | the override                 |
//! | `Split` override or `MuscleGain`    | Upper or Lower, chosen by RNG |
//! | `WeightLoss`, `GeneralFitness`, `Strength` | Full Body             |
//!
//! An empty bucket contributes nothing to the plan. Shortfalls are visible in
//! the exercise count against `requested_exercises` and explained in `notes`.

use crate::classifier::ExerciseBuckets;
use crate::config::EngineConfig;
use crate::plan_tables::{workout_title, COOLDOWN, WARMUP};
use crate::selector::{equipment_filter, select_items};
use chrono::Utc;
use fitplan_core::models::{
    EquipmentTier, ExerciseBucket, ExerciseEntry, ExerciseItem, Goal, RecentHistory, UserProfile,
    WorkoutCategory, WorkoutPlan,
};
use rand::Rng;
use tracing::{info, warn};

/// One line of a category recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeSlot {
    /// Bucket to draw from
    pub bucket: ExerciseBucket,
    /// Exercises wanted from it
    pub count: usize,
}

const fn slot(bucket: ExerciseBucket, count: usize) -> RecipeSlot {
    RecipeSlot { bucket, count }
}

const FULL_BODY: &[RecipeSlot] = &[
    slot(ExerciseBucket::Cardio, 1),
    slot(ExerciseBucket::Lower, 2),
    slot(ExerciseBucket::Upper, 3),
    slot(ExerciseBucket::Core, 1),
];
const UPPER_BODY: &[RecipeSlot] = &[slot(ExerciseBucket::Upper, 5), slot(ExerciseBucket::Core, 1)];
const LOWER_BODY: &[RecipeSlot] = &[slot(ExerciseBucket::Lower, 5), slot(ExerciseBucket::Core, 1)];
const CARDIO: &[RecipeSlot] = &[slot(ExerciseBucket::Cardio, 5), slot(ExerciseBucket::Core, 1)];
const MOBILITY: &[RecipeSlot] = &[slot(ExerciseBucket::Mobility, 4)];
const CORE: &[RecipeSlot] = &[slot(ExerciseBucket::Core, 4), slot(ExerciseBucket::Mobility, 1)];

/// Fixed bucket recipe for a category
///
/// `Split` is resolved before composition; asking for its recipe directly
/// yields the upper-body recipe.
#[must_use]
pub const fn recipe_for(category: WorkoutCategory) -> &'static [RecipeSlot] {
    match category {
        WorkoutCategory::FullBody => FULL_BODY,
        WorkoutCategory::UpperBody | WorkoutCategory::Split => UPPER_BODY,
        WorkoutCategory::LowerBody => LOWER_BODY,
        WorkoutCategory::Cardio => CARDIO,
        WorkoutCategory::Mobility => MOBILITY,
        WorkoutCategory::Core => CORE,
    }
}

/// Concrete category for a goal and optional override; never `Split`
pub fn resolve_category<R: Rng + ?Sized>(
    goal: Goal,
    category_override: Option<WorkoutCategory>,
    rng: &mut R,
) -> WorkoutCategory {
    let requested = category_override.unwrap_or(match goal {
        Goal::MuscleGain => WorkoutCategory::Split,
        Goal::WeightLoss | Goal::GeneralFitness | Goal::Strength => WorkoutCategory::FullBody,
    });
    if requested == WorkoutCategory::Split {
        if rng.gen_bool(0.5) {
            WorkoutCategory::UpperBody
        } else {
            WorkoutCategory::LowerBody
        }
    } else {
        requested
    }
}

fn annotate(
    item: &ExerciseItem,
    bucket: ExerciseBucket,
    goal: Goal,
    config: &EngineConfig,
) -> ExerciseEntry {
    ExerciseEntry {
        id: item.id.clone(),
        name: item.name.clone(),
        bucket,
        equipment: item.equipment_kind(),
        target_muscles: item.primary_muscles.clone(),
        sets: config.workout.sets,
        reps: config.workout.reps_for(goal),
        rest_seconds: config.workout.rest_seconds,
        instructions: item.instructions.clone(),
    }
}

/// Compose a workout
///
/// Never fails. With no usable exercise at all the plan is empty: zero
/// exercises, zero duration, no warm-up or cool-down.
pub fn compose_workout<R: Rng + ?Sized>(
    profile: &UserProfile,
    history: &RecentHistory,
    category_override: Option<WorkoutCategory>,
    buckets: &ExerciseBuckets,
    config: &EngineConfig,
    rng: &mut R,
) -> WorkoutPlan {
    let category = resolve_category(profile.goal, category_override, rng);
    let recipe = recipe_for(category);
    let requested_exercises: usize = recipe.iter().map(|s| s.count).sum();

    let owned = profile.equipment_kinds();
    let filter = equipment_filter(&owned);
    let mut exercises = Vec::with_capacity(requested_exercises);
    let mut notes = Vec::new();

    for recipe_slot in recipe {
        let selection = select_items(
            buckets.get(recipe_slot.bucket),
            &filter,
            history,
            recipe_slot.count,
            rng,
        );
        if selection.is_short() {
            warn!(
                bucket = %recipe_slot.bucket,
                requested = recipe_slot.count,
                selected = selection.items.len(),
                eligible = selection.eligible,
                "Recipe slot came up short"
            );
            notes.push(format!(
                "Only {} of {} {} exercises match your equipment",
                selection.items.len(),
                recipe_slot.count,
                recipe_slot.bucket
            ));
        }
        if selection.repeats_used > 0 {
            warn!(
                bucket = %recipe_slot.bucket,
                repeats = selection.repeats_used,
                "Reused recently performed exercises"
            );
            notes.push(format!(
                "{} {} exercises repeat from recent sessions",
                selection.repeats_used, recipe_slot.bucket
            ));
        }
        exercises.extend(
            selection
                .items
                .into_iter()
                .map(|item| annotate(item, recipe_slot.bucket, profile.goal, config)),
        );
    }

    let equipment_tier = exercises
        .iter()
        .map(|e| e.equipment.tier())
        .max()
        .unwrap_or(EquipmentTier::Bodyweight);

    let (warmup, cooldown, total_duration_minutes) = if exercises.is_empty() {
        notes.push("No exercises in the catalog match this category and equipment".to_owned());
        (Vec::new(), Vec::new(), 0)
    } else {
        let count = u16::try_from(exercises.len()).unwrap_or(u16::MAX);
        (
            WARMUP.iter().map(|s| (*s).to_owned()).collect(),
            COOLDOWN.iter().map(|s| (*s).to_owned()).collect(),
            config
                .workout
                .minutes_per_exercise
                .saturating_mul(count)
                .saturating_add(config.workout.warmup_cooldown_minutes),
        )
    };

    let plan = WorkoutPlan {
        title: workout_title(category, profile.goal),
        category,
        tags: vec![
            category.label().to_lowercase(),
            profile.goal.label().to_lowercase(),
            equipment_tier.label().to_lowercase(),
        ],
        difficulty: profile.experience_level.label().to_owned(),
        equipment_label: equipment_tier.label().to_owned(),
        total_duration_minutes,
        warmup,
        exercises,
        cooldown,
        requested_exercises,
        notes,
        generated_at: Utc::now(),
    };
    info!(
        category = %plan.category,
        exercises = plan.exercises.len(),
        requested = plan.requested_exercises,
        duration_minutes = plan.total_duration_minutes,
        equipment = %plan.equipment_label,
        "Composed workout"
    );
    plan
}
