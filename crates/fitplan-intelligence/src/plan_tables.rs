// ABOUTME: Static lookup tables for plan text: warm-ups, meal purposes, strategies, supplements
// ABOUTME: Every table is keyed by the closed Goal enum with general fitness as the fallback arm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{DietStrategy, FocusPoint, Goal, MealSlot, Supplement, WorkoutCategory};

/// Warm-up routine attached to every non-empty workout
pub const WARMUP: &[&str] = &[
    "5 minutes of brisk walking or light jogging in place",
    "Arm circles, 10 forward and 10 backward",
    "Leg swings, 10 per side",
    "Bodyweight squats, 10 slow reps",
];

/// Cool-down routine attached to every non-empty workout
pub const COOLDOWN: &[&str] = &[
    "2 minutes of easy walking to bring the heart rate down",
    "Hamstring and quad stretch, 30 seconds per side",
    "Chest and shoulder doorway stretch, 30 seconds",
    "Deep breathing in child's pose, 1 minute",
];

/// Disclaimer attached to every diet plan
pub const DIET_DISCLAIMER: &str = "This plan is general guidance generated from your profile. \
    It is not medical advice. Consult a doctor or registered dietitian before making major \
    dietary changes, especially if you have a medical condition, are pregnant, or take medication.";

/// Title for a composed workout
#[must_use]
pub fn workout_title(category: WorkoutCategory, goal: Goal) -> String {
    let focus = match goal {
        Goal::MuscleGain => "Hypertrophy",
        Goal::WeightLoss => "Fat Burn",
        Goal::Strength => "Strength",
        Goal::GeneralFitness => "Conditioning",
    };
    format!("{category} {focus} Session")
}

/// Purpose lines for a meal slot, one of which is picked per plan
#[must_use]
pub const fn meal_purposes(goal: Goal, slot: MealSlot) -> &'static [&'static str] {
    match (goal, slot) {
        (Goal::MuscleGain | Goal::Strength, MealSlot::Breakfast) => &[
            "Front-loads protein to start muscle protein synthesis early",
            "Carbohydrate and protein to refill glycogen after the overnight fast",
            "Energy-dense start that makes the daily surplus easier to reach",
        ],
        (Goal::MuscleGain | Goal::Strength, MealSlot::Lunch) => &[
            "Largest carbohydrate meal to fuel afternoon training",
            "Balanced plate keeping amino acids available through the day",
            "Steady energy with a solid protein dose",
        ],
        (Goal::MuscleGain | Goal::Strength, MealSlot::Snack) => &[
            "Pre-workout fuel that sits light",
            "Bridges the gap so protein intake stays evenly spread",
            "Quick calories toward the surplus",
        ],
        (Goal::MuscleGain | Goal::Strength, MealSlot::Dinner) => &[
            "Recovery meal with protein for overnight repair",
            "Replenishes glycogen after the day's training",
            "Closes the day's protein target",
        ],
        (Goal::WeightLoss, MealSlot::Breakfast) => &[
            "High-protein start that keeps hunger down through the morning",
            "Fibre-rich breakfast for steady blood sugar",
            "Moderate portion that leaves room in the deficit",
        ],
        (Goal::WeightLoss, MealSlot::Lunch) => &[
            "Volume from vegetables keeps the plate full for fewer calories",
            "Protein and fibre to hold off the afternoon slump",
            "Balanced midday meal sized for the deficit",
        ],
        (Goal::WeightLoss, MealSlot::Snack) => &[
            "Small protein snack to curb evening cravings",
            "Low-calorie bite that prevents overeating at dinner",
            "Fibre and crunch for satiety",
        ],
        (Goal::WeightLoss, MealSlot::Dinner) => &[
            "Lean protein to preserve muscle while in a deficit",
            "Lighter evening meal that supports sleep",
            "Finishes the protein target without extra calories",
        ],
        (Goal::GeneralFitness, MealSlot::Breakfast) => &[
            "Balanced start with protein, carbohydrate, and fat",
            "Sustained morning energy",
            "Whole-food breakfast to build consistent habits",
        ],
        (Goal::GeneralFitness, MealSlot::Lunch) => &[
            "Balanced plate for steady afternoon energy",
            "Mixed macronutrients to support daily activity",
            "Whole grains and protein for lasting fullness",
        ],
        (Goal::GeneralFitness, MealSlot::Snack) => &[
            "Light snack to keep energy even",
            "Micronutrient boost between meals",
            "Keeps hunger in check before dinner",
        ],
        (Goal::GeneralFitness, MealSlot::Dinner) => &[
            "Recovery-focused evening meal",
            "Balanced dinner that rounds out the day's nutrients",
            "Protein and vegetables to support repair",
        ],
    }
}

/// Strategy block for a goal
#[must_use]
pub fn diet_strategy(goal: Goal) -> DietStrategy {
    let (headline, calorie_approach, protein_approach, meal_timing) = match goal {
        Goal::MuscleGain => (
            "Lean bulk: a controlled surplus with high protein",
            "About 350 kcal above maintenance to add muscle while limiting fat gain",
            "2.0 g of protein per kg of body weight, spread across every meal",
            "Eat a carbohydrate and protein meal 1-2 hours before and after training",
        ),
        Goal::WeightLoss => (
            "Moderate deficit that protects lean mass",
            "About 400 kcal below maintenance for steady, sustainable fat loss",
            "2.2 g of protein per kg of body weight to preserve muscle in a deficit",
            "Keep meals regular and make dinner the lightest meal",
        ),
        Goal::Strength => (
            "Performance fuelling for heavy training",
            "About 200 kcal above maintenance to support recovery from heavy lifts",
            "1.8 g of protein per kg of body weight",
            "Prioritise carbohydrate in the meal before lifting",
        ),
        Goal::GeneralFitness => (
            "Balanced maintenance eating",
            "Calories at maintenance to support activity and recovery",
            "1.6 g of protein per kg of body weight",
            "Three meals and a snack at regular times",
        ),
    };
    DietStrategy {
        headline: headline.to_owned(),
        calorie_approach: calorie_approach.to_owned(),
        protein_approach: protein_approach.to_owned(),
        meal_timing: meal_timing.to_owned(),
        hydration: "Drink 2.5-3.5 litres of water a day, more on training days".to_owned(),
    }
}

/// Explanatory cards for a goal
#[must_use]
pub fn focus_points(goal: Goal) -> Vec<FocusPoint> {
    let goal_card = match goal {
        Goal::MuscleGain => (
            "Progressive surplus",
            "If body weight is flat for two weeks, add 100-150 kcal a day.",
        ),
        Goal::WeightLoss => (
            "Protect muscle",
            "Keep protein high and keep lifting so the weight lost is mostly fat.",
        ),
        Goal::Strength => (
            "Fuel the heavy days",
            "Match bigger meals to the hardest sessions of the week.",
        ),
        Goal::GeneralFitness => (
            "Consistency first",
            "Eating well most days beats eating perfectly some days.",
        ),
    };
    [
        goal_card,
        (
            "Protein at every meal",
            "Spreading protein over the day supports repair better than one large dose.",
        ),
        (
            "Whole foods",
            "Build meals around vegetables, legumes, whole grains, and minimally processed protein.",
        ),
        (
            "Sleep and recovery",
            "Seven to nine hours of sleep does as much for results as the meal plan.",
        ),
    ]
    .into_iter()
    .map(|(title, detail)| FocusPoint {
        title: title.to_owned(),
        detail: detail.to_owned(),
    })
    .collect()
}

/// Supplement suggestions for a goal
#[must_use]
pub fn supplements(goal: Goal) -> Vec<Supplement> {
    let rows: &[(&str, &str, &str)] = match goal {
        Goal::MuscleGain => &[
            ("Whey or plant protein", "20-30 g", "After training or to fill a protein gap"),
            ("Creatine monohydrate", "3-5 g", "Daily, any time"),
            ("Vitamin D3", "1000-2000 IU", "With a meal"),
        ],
        Goal::WeightLoss => &[
            ("Whey or plant protein", "20-30 g", "As a snack to stay within calories"),
            ("Fish oil or algae omega-3", "1-2 g", "With a meal"),
            ("Multivitamin", "1 tablet", "With breakfast"),
        ],
        Goal::Strength => &[
            ("Creatine monohydrate", "3-5 g", "Daily, any time"),
            ("Caffeine", "100-200 mg", "30-60 minutes before training"),
            ("Whey or plant protein", "20-30 g", "After training"),
        ],
        Goal::GeneralFitness => &[
            ("Multivitamin", "1 tablet", "With breakfast"),
            ("Vitamin D3", "1000-2000 IU", "With a meal"),
        ],
    };
    rows.iter()
        .map(|(name, dosage, timing)| Supplement {
            name: (*name).to_owned(),
            dosage: (*dosage).to_owned(),
            timing: (*timing).to_owned(),
        })
        .collect()
}
