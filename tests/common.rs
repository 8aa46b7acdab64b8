// ABOUTME: Shared test utilities: quiet logging, seeded RNGs, and fixture catalogs and profiles
// ABOUTME: Included by each integration test through `mod common;`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(
    dead_code,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]

use fitplan::models::{
    DietType, ExerciseItem, ExperienceLevel, FoodDiet, FoodItem, Goal, MealSlot, Sex, UserProfile,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic RNG for reproducible plans
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn exercise(
    id: &str,
    name: &str,
    category: &str,
    equipment: Option<&str>,
    muscles: &[&str],
) -> ExerciseItem {
    ExerciseItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        equipment: equipment.map(str::to_owned),
        primary_muscles: muscles.iter().map(|m| (*m).to_owned()).collect(),
        instructions: vec![format!("Perform {name} with control")],
    }
}

/// Exercise catalog with every bucket populated and a mix of equipment
///
/// Bodyweight counts: upper 4, lower 4, core 3, cardio 4, mobility 4.
pub fn sample_exercise_catalog() -> Vec<ExerciseItem> {
    vec![
        // upper
        exercise("u1", "Push-Up", "strength", Some("body only"), &["chest", "triceps"]),
        exercise("u2", "Pull-Up", "strength", None, &["lats", "biceps"]),
        exercise("u3", "Bench Dip", "strength", Some("body only"), &["triceps"]),
        exercise("u4", "Pike Push-Up", "strength", None, &["shoulders"]),
        exercise("u5", "Dumbbell Bench Press", "strength", Some("dumbbell"), &["chest"]),
        exercise("u6", "Dumbbell Curl", "strength", Some("dumbbell"), &["biceps"]),
        exercise("u7", "Barbell Bench Press", "powerlifting", Some("barbell"), &["chest"]),
        exercise("u8", "Seated Cable Row", "strength", Some("cable"), &["middle back"]),
        exercise("u9", "Machine Shoulder Press", "strength", Some("machine"), &["shoulders"]),
        // lower
        exercise("l1", "Bodyweight Squat", "strength", None, &["quadriceps"]),
        exercise("l2", "Walking Lunge", "strength", Some("body only"), &["quadriceps", "glutes"]),
        exercise("l3", "Glute Bridge", "strength", None, &["glutes"]),
        exercise("l4", "Standing Calf Raise", "strength", None, &["calves"]),
        exercise("l5", "Barbell Back Squat", "powerlifting", Some("barbell"), &["quadriceps"]),
        exercise("l6", "Dumbbell Romanian Deadlift", "strength", Some("dumbbell"), &["hamstrings"]),
        exercise("l7", "Leg Press", "strength", Some("machine"), &["quadriceps"]),
        // core
        exercise("c1", "Plank", "strength", None, &["abdominals"]),
        exercise("c2", "Crunch", "strength", Some("body only"), &["abdominals"]),
        exercise("c3", "Russian Twist", "strength", None, &["obliques"]),
        exercise("c4", "Cable Crunch", "strength", Some("cable"), &["abdominals"]),
        // cardio
        exercise("k1", "Jumping Jacks", "cardio", None, &["quadriceps"]),
        exercise("k2", "Burpee", "plyometrics", None, &["chest", "quadriceps"]),
        exercise("k3", "Mountain Climber", "cardio", Some("body only"), &["abdominals"]),
        exercise("k4", "High Knees", "cardio", None, &["hip flexors"]),
        exercise("k5", "Kettlebell Swing", "cardio", Some("kettlebells"), &["glutes"]),
        // mobility
        exercise("m1", "Standing Hamstring Stretch", "stretching", None, &["hamstrings"]),
        exercise("m2", "Hip Flexor Stretch", "stretching", None, &["hip flexors"]),
        exercise("m3", "Cat Cow", "stretching", None, &["lower back"]),
        exercise("m4", "Child's Pose", "stretching", None, &["lats"]),
        exercise("m5", "Foam Roll Quads", "stretching", Some("foam roll"), &["quadriceps"]),
    ]
}

pub fn food(id: &str, slot: MealSlot, diet: FoodDiet, calories: u32, protein_g: u32) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: format!("Meal {id}"),
        slot,
        diet,
        calories,
        protein_g,
        carbs_g: calories / 8,
        fat_g: calories / 30,
        tags: Vec::new(),
        allergens: Vec::new(),
    }
}

pub fn profile(goal: Goal, level: ExperienceLevel, diet: DietType) -> UserProfile {
    UserProfile {
        goal,
        experience_level: level,
        diet_type: diet,
        body_weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age: Some(25.0),
        sex: Sex::Male,
        ..UserProfile::default()
    }
}

/// The pinned reference profile: 70 kg, 175 cm, 25 y, male, muscle gain, intermediate
pub fn reference_profile() -> UserProfile {
    profile(
        Goal::MuscleGain,
        ExperienceLevel::Intermediate,
        DietType::NonVegetarian,
    )
}

pub fn with_equipment(mut profile: UserProfile, equipment: &[&str]) -> UserProfile {
    profile.equipment = equipment.iter().map(|e| (*e).to_owned()).collect();
    profile
}

pub const ALL_GOALS: [Goal; 4] = [
    Goal::MuscleGain,
    Goal::WeightLoss,
    Goal::GeneralFitness,
    Goal::Strength,
];

pub const ALL_DIETS: [DietType; 4] = [
    DietType::Vegetarian,
    DietType::NonVegetarian,
    DietType::Vegan,
    DietType::Eggetarian,
];
