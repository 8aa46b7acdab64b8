// ABOUTME: Macro normalizer tests: exact sums after rounding, residual slot choice, and edge cases
// ABOUTME: Includes the dinner-missing fallback and a seeded sweep over random meal sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::seeded_rng;
use fitplan::models::{FoodDiet, MacroTargets, MealEntry, MealSlot};
use fitplan::normalizer::{normalize_meals, residual_slot};
use rand::Rng;
use std::collections::BTreeMap;

const TOLERANCE: f64 = 0.02;

fn meal(calories: u32, protein_g: u32) -> MealEntry {
    MealEntry {
        id: format!("{calories}-{protein_g}"),
        name: format!("Meal {calories}"),
        purpose: "test".to_owned(),
        diet: FoodDiet::Any,
        calories,
        protein_g,
        carbs_g: 50,
        fat_g: 15,
    }
}

fn meals(entries: &[(MealSlot, u32, u32)]) -> BTreeMap<MealSlot, MealEntry> {
    entries
        .iter()
        .map(|(slot, kcal, protein)| (*slot, meal(*kcal, *protein)))
        .collect()
}

fn sums(meals: &BTreeMap<MealSlot, MealEntry>) -> (u32, u32) {
    (
        meals.values().map(|m| m.calories).sum(),
        meals.values().map(|m| m.protein_g).sum(),
    )
}

#[test]
fn test_four_slots_sum_exactly_with_residual_in_dinner() {
    common::init_test_logging();
    let input = meals(&[
        (MealSlot::Breakfast, 420, 14),
        (MealSlot::Lunch, 690, 45),
        (MealSlot::Snack, 180, 10),
        (MealSlot::Dinner, 520, 48),
    ]);
    let targets = MacroTargets {
        calories: 3028,
        protein_g: 140,
    };

    let (out, report) = normalize_meals(&input, targets, TOLERANCE);
    assert_eq!(sums(&out), (3028, 140));
    assert_eq!(report.residual_slot, Some(MealSlot::Dinner));
    assert!(report.calorie_factor.is_some());
    assert!(report.protein_factor.is_some());

    // Non-residual slots are the plain rounded scale
    let factor = 3028.0 / 1810.0;
    assert_eq!(out[&MealSlot::Breakfast].calories, (420.0_f64 * factor).round() as u32);
    assert_eq!(out[&MealSlot::Lunch].calories, (690.0_f64 * factor).round() as u32);
    assert_eq!(out[&MealSlot::Snack].calories, (180.0_f64 * factor).round() as u32);
}

#[test]
fn test_input_is_not_mutated() {
    let input = meals(&[(MealSlot::Lunch, 500, 20), (MealSlot::Dinner, 500, 20)]);
    let before = input.clone();
    let _ = normalize_meals(
        &input,
        MacroTargets {
            calories: 2500,
            protein_g: 120,
        },
        TOLERANCE,
    );
    assert_eq!(input, before);
}

#[test]
fn test_missing_dinner_sends_residual_to_last_present_slot() {
    let input = meals(&[
        (MealSlot::Breakfast, 333, 17),
        (MealSlot::Lunch, 333, 17),
        (MealSlot::Snack, 333, 17),
    ]);
    assert_eq!(residual_slot(&input), Some(MealSlot::Snack));

    let targets = MacroTargets {
        calories: 2000,
        protein_g: 101,
    };
    let (out, report) = normalize_meals(&input, targets, TOLERANCE);
    assert_eq!(report.residual_slot, Some(MealSlot::Snack));
    assert_eq!(sums(&out), (2000, 101));
    // 333 x 2000/999 = 666.67 rounds to 667 for the first two slots
    assert_eq!(out[&MealSlot::Breakfast].calories, 667);
    assert_eq!(out[&MealSlot::Lunch].calories, 667);
    assert_eq!(out[&MealSlot::Snack].calories, 666);
}

#[test]
fn test_only_breakfast_present() {
    let input = meals(&[(MealSlot::Breakfast, 400, 20)]);
    let (out, report) = normalize_meals(
        &input,
        MacroTargets {
            calories: 1850,
            protein_g: 95,
        },
        TOLERANCE,
    );
    assert_eq!(report.residual_slot, Some(MealSlot::Breakfast));
    assert_eq!(out[&MealSlot::Breakfast].calories, 1850);
    assert_eq!(out[&MealSlot::Breakfast].protein_g, 95);
}

#[test]
fn test_empty_mapping_is_left_empty() {
    let (out, report) = normalize_meals(
        &BTreeMap::new(),
        MacroTargets {
            calories: 2000,
            protein_g: 100,
        },
        TOLERANCE,
    );
    assert!(out.is_empty());
    assert_eq!(report.residual_slot, None);
    assert_eq!(report.calorie_residual, 0);
}

#[test]
fn test_negative_residual_moves_to_largest_slot() {
    // Within a wide tolerance nothing is rescaled; the -11 kcal residual
    // cannot come out of a 1 kcal dinner, so lunch absorbs it.
    let input = meals(&[(MealSlot::Lunch, 100, 10), (MealSlot::Dinner, 1, 10)]);
    let (out, report) = normalize_meals(
        &input,
        MacroTargets {
            calories: 90,
            protein_g: 20,
        },
        0.5,
    );
    assert_eq!(report.calorie_factor, None);
    assert_eq!(report.calorie_residual, -11);
    assert_eq!(out[&MealSlot::Dinner].calories, 1);
    assert_eq!(out[&MealSlot::Lunch].calories, 89);
    assert_eq!(sums(&out), (90, 20));
}

#[test]
fn test_protein_normalised_independently() {
    let input = meals(&[(MealSlot::Lunch, 1000, 10), (MealSlot::Dinner, 1000, 10)]);
    let (out, report) = normalize_meals(
        &input,
        MacroTargets {
            calories: 2000,
            protein_g: 150,
        },
        TOLERANCE,
    );
    assert_eq!(report.calorie_factor, None);
    assert!(report.protein_factor.is_some());
    assert_eq!(out[&MealSlot::Lunch].calories, 1000);
    assert_eq!(sums(&out), (2000, 150));
}

#[test]
fn test_random_meal_sets_always_sum_exactly() {
    let mut rng = seeded_rng(2024);
    for _ in 0..500 {
        let mut entries = Vec::new();
        for slot in MealSlot::ALL {
            if rng.gen_bool(0.8) {
                entries.push((slot, rng.gen_range(0..900), rng.gen_range(0..60)));
            }
        }
        let input = meals(&entries);
        let targets = MacroTargets {
            calories: rng.gen_range(1200..4500),
            protein_g: rng.gen_range(40..260),
        };
        let (out, _) = normalize_meals(&input, targets, TOLERANCE);

        if input.is_empty() {
            assert!(out.is_empty());
        } else {
            assert_eq!(sums(&out), (targets.calories, targets.protein_g), "{entries:?}");
            assert_eq!(out.len(), input.len());
        }
    }
}
