// ABOUTME: Workout composer tests: recipes, equipment constraints, shortfalls, annotations, and labels
// ABOUTME: Runs against the shared sample catalog with seeded RNGs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{exercise, profile, sample_exercise_catalog, seeded_rng, with_equipment, ALL_GOALS};
use fitplan::classifier::{classify_exercises, ExerciseBuckets};
use fitplan::config::EngineConfig;
use fitplan::models::{
    DietType, EquipmentKind, ExerciseBucket, ExperienceLevel, Goal, RecentHistory, RepRange,
    UserProfile, WorkoutCategory, WorkoutPlan,
};
use fitplan::workout_composer::compose_workout;
use std::collections::BTreeSet;

fn sample_buckets() -> ExerciseBuckets {
    classify_exercises(&sample_exercise_catalog())
}

fn bodyweight_user(goal: Goal) -> UserProfile {
    profile(goal, ExperienceLevel::Intermediate, DietType::Vegetarian)
}

fn compose(
    profile: &UserProfile,
    history: &RecentHistory,
    category: Option<WorkoutCategory>,
    buckets: &ExerciseBuckets,
    seed: u64,
) -> WorkoutPlan {
    compose_workout(
        profile,
        history,
        category,
        buckets,
        &EngineConfig::default(),
        &mut seeded_rng(seed),
    )
}

fn names(plan: &WorkoutPlan) -> Vec<String> {
    plan.exercise_names().map(str::to_owned).collect()
}

#[test]
fn test_bodyweight_full_body_uses_no_equipment() {
    common::init_test_logging();
    let buckets = sample_buckets();
    let user = bodyweight_user(Goal::WeightLoss);

    for seed in 0..25 {
        let plan = compose(&user, &RecentHistory::default(), None, &buckets, seed);
        assert_eq!(plan.category, WorkoutCategory::FullBody);
        assert_eq!(plan.exercises.len(), 7);
        assert!(!plan.is_short());
        assert!(plan.notes.is_empty(), "{:?}", plan.notes);
        for entry in &plan.exercises {
            assert_eq!(entry.equipment, EquipmentKind::BodyWeight, "{}", entry.name);
        }
        assert_eq!(plan.equipment_label, "Bodyweight");
    }
}

#[test]
fn test_full_body_follows_recipe_order() {
    let plan = compose(
        &bodyweight_user(Goal::GeneralFitness),
        &RecentHistory::default(),
        None,
        &sample_buckets(),
        11,
    );
    let order: Vec<ExerciseBucket> = plan.exercises.iter().map(|e| e.bucket).collect();
    assert_eq!(
        order,
        vec![
            ExerciseBucket::Cardio,
            ExerciseBucket::Lower,
            ExerciseBucket::Lower,
            ExerciseBucket::Upper,
            ExerciseBucket::Upper,
            ExerciseBucket::Upper,
            ExerciseBucket::Core,
        ]
    );
}

#[test]
fn test_every_exercise_fits_owned_equipment() {
    let buckets = sample_buckets();
    let kits: [&[&str]; 4] = [
        &[],
        &["Dumbbells"],
        &["dumbbell", "barbell"],
        &["barbell", "cable", "machine", "kettlebells", "foam roller"],
    ];
    let categories = [
        None,
        Some(WorkoutCategory::UpperBody),
        Some(WorkoutCategory::LowerBody),
        Some(WorkoutCategory::Cardio),
        Some(WorkoutCategory::Mobility),
        Some(WorkoutCategory::Core),
        Some(WorkoutCategory::Split),
    ];

    for kit in kits {
        for goal in ALL_GOALS {
            let user = with_equipment(bodyweight_user(goal), kit);
            let owned = user.equipment_kinds();
            for category in categories {
                for seed in 0..5 {
                    let plan = compose(&user, &RecentHistory::default(), category, &buckets, seed);
                    assert_ne!(plan.category, WorkoutCategory::Split);
                    for entry in &plan.exercises {
                        assert!(
                            owned.contains(&entry.equipment),
                            "{kit:?} {category:?}: {} needs {:?}",
                            entry.name,
                            entry.equipment
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_upper_body_without_equipment_comes_up_short() {
    let plan = compose(
        &bodyweight_user(Goal::Strength),
        &RecentHistory::default(),
        Some(WorkoutCategory::UpperBody),
        &sample_buckets(),
        4,
    );
    assert_eq!(plan.category, WorkoutCategory::UpperBody);
    assert_eq!(plan.requested_exercises, 6);
    assert_eq!(plan.exercises.len(), 5);
    assert!(plan.is_short());
    assert!(plan
        .notes
        .iter()
        .any(|n| n == "Only 4 of 5 upper exercises match your equipment"));
}

#[test]
fn test_empty_catalog_gives_empty_plan() {
    let buckets = classify_exercises(&[]);
    let plan = compose(
        &bodyweight_user(Goal::MuscleGain),
        &RecentHistory::default(),
        None,
        &buckets,
        0,
    );
    assert!(plan.is_empty());
    assert_eq!(plan.total_duration_minutes, 0);
    assert!(plan.warmup.is_empty());
    assert!(plan.cooldown.is_empty());
    assert_eq!(plan.equipment_label, "Bodyweight");
    assert!(!plan.notes.is_empty());
}

#[test]
fn test_missing_mobility_bucket_leaves_mobility_plan_empty() {
    let catalog: Vec<_> = sample_exercise_catalog()
        .into_iter()
        .filter(|e| e.category != "stretching")
        .collect();
    let plan = compose(
        &bodyweight_user(Goal::GeneralFitness),
        &RecentHistory::default(),
        Some(WorkoutCategory::Mobility),
        &classify_exercises(&catalog),
        2,
    );
    assert!(plan.is_empty());
    assert_eq!(plan.requested_exercises, 4);
}

#[test]
fn test_annotations_follow_goal() {
    let buckets = sample_buckets();
    let gain = compose(
        &bodyweight_user(Goal::MuscleGain),
        &RecentHistory::default(),
        None,
        &buckets,
        8,
    );
    for entry in &gain.exercises {
        assert_eq!(entry.sets, 3);
        assert_eq!(entry.reps, RepRange { min: 8, max: 12 });
        assert_eq!(entry.rest_seconds, 60);
        assert!(!entry.instructions.is_empty());
    }

    let loss = compose(
        &bodyweight_user(Goal::WeightLoss),
        &RecentHistory::default(),
        None,
        &buckets,
        8,
    );
    assert!(loss
        .exercises
        .iter()
        .all(|e| e.reps == RepRange { min: 12, max: 15 }));
    assert_eq!(loss.difficulty, "Intermediate");
    assert_eq!(loss.tags, vec!["full body", "weight loss", "bodyweight"]);
    assert_eq!(loss.warmup.len(), 4);
    assert_eq!(loss.cooldown.len(), 4);
}

#[test]
fn test_duration_is_five_minutes_per_exercise_plus_ten() {
    let buckets = sample_buckets();
    let user = with_equipment(bodyweight_user(Goal::GeneralFitness), &["dumbbell"]);
    for category in [
        WorkoutCategory::FullBody,
        WorkoutCategory::UpperBody,
        WorkoutCategory::LowerBody,
        WorkoutCategory::Cardio,
        WorkoutCategory::Mobility,
        WorkoutCategory::Core,
    ] {
        let plan = compose(&user, &RecentHistory::default(), Some(category), &buckets, 21);
        let expected = 5 * plan.exercises.len() + 10;
        assert_eq!(usize::from(plan.total_duration_minutes), expected, "{category}");
    }
}

#[test]
fn test_gym_equipment_sets_gym_label() {
    let catalog = vec![exercise(
        "bb",
        "Barbell Overhead Press",
        "strength",
        Some("barbell"),
        &["shoulders"],
    )];
    let user = with_equipment(bodyweight_user(Goal::Strength), &["Barbell"]);
    let plan = compose(
        &user,
        &RecentHistory::default(),
        Some(WorkoutCategory::UpperBody),
        &classify_exercises(&catalog),
        1,
    );
    assert_eq!(plan.exercises.len(), 1);
    assert_eq!(plan.equipment_label, "Gym");
    assert!(plan.tags.contains(&"gym".to_owned()));
    assert_eq!(plan.total_duration_minutes, 15);
}

#[test]
fn test_muscle_gain_resolves_split_to_upper_or_lower() {
    let buckets = sample_buckets();
    let user = bodyweight_user(Goal::MuscleGain);
    let seen: BTreeSet<String> = (0..40)
        .map(|seed| {
            compose(&user, &RecentHistory::default(), None, &buckets, seed)
                .category
                .to_string()
        })
        .collect();
    let expected: BTreeSet<String> = ["Upper Body", "Lower Body"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(seen, expected);

    let explicit = compose(
        &bodyweight_user(Goal::WeightLoss),
        &RecentHistory::default(),
        Some(WorkoutCategory::Split),
        &buckets,
        3,
    );
    assert!(matches!(
        explicit.category,
        WorkoutCategory::UpperBody | WorkoutCategory::LowerBody
    ));
}

#[test]
fn test_same_seed_same_workout() {
    let buckets = sample_buckets();
    let user = with_equipment(bodyweight_user(Goal::GeneralFitness), &["dumbbell", "barbell"]);
    let history = RecentHistory::from_names(["Plank"], 50);
    let a = compose(&user, &history, None, &buckets, 77);
    let b = compose(&user, &history, None, &buckets, 77);
    assert_eq!(names(&a), names(&b));
    assert_eq!(a.exercises, b.exercises);
}

#[test]
fn test_recent_exercises_are_avoided() {
    let buckets = sample_buckets();
    let user = bodyweight_user(Goal::WeightLoss);
    let history = RecentHistory::from_names(["Push-Up", "plank", "BURPEE"], 50);

    for seed in 0..30 {
        let plan = compose(&user, &history, None, &buckets, seed);
        assert_eq!(plan.exercises.len(), 7);
        for name in names(&plan) {
            assert!(!history.contains(&name), "seed {seed} repeated {name}");
        }
    }
}

#[test]
fn test_repeats_are_reported_when_fresh_pool_runs_out() {
    let buckets = sample_buckets();
    let user = bodyweight_user(Goal::WeightLoss);
    // Three of the four bodyweight upper moves are recent; full body wants three
    let history = RecentHistory::from_names(["Push-Up", "Pull-Up", "Bench Dip"], 50);
    let plan = compose(&user, &history, None, &buckets, 5);

    assert_eq!(plan.exercises.len(), 7);
    assert!(names(&plan).contains(&"Pike Push-Up".to_owned()));
    assert!(plan
        .notes
        .iter()
        .any(|n| n == "2 upper exercises repeat from recent sessions"));
}
