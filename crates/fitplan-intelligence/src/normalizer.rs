// ABOUTME: Macro normalizer rescaling selected meals so calories and protein hit targets exactly
// ABOUTME: Proportional scaling, integer rounding, then the rounding residual goes to one slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Macro Normalizer
//!
//! Calories and protein are normalised independently with the same steps:
//!
//! 1. Sum the slot values. When the relative deviation from the target
//!    exceeds the tolerance, multiply every slot by `target / sum` and round.
//!    A zero sum is instead split evenly across the present slots.
//! 2. Add the residual `target - sum` to the residual slot. That is dinner
//!    when present, otherwise the last present slot in eating order. If the
//!    residual would push that slot below zero, the largest slot takes it.
//!
//! After both passes the slot sums equal the targets exactly whenever at
//! least one meal is present. Carbohydrate and fat follow the calorie factor
//! without residual correction.

use fitplan_core::models::{MacroTargets, MealEntry, MealSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// What a normalisation run changed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Factor applied to calories, if rescaled
    pub calorie_factor: Option<f64>,
    /// Factor applied to protein, if rescaled
    pub protein_factor: Option<f64>,
    /// Slot that received the rounding residuals
    pub residual_slot: Option<MealSlot>,
    /// Calories added to (or removed from) the residual slot
    pub calorie_residual: i64,
    /// Protein added to (or removed from) the residual slot
    pub protein_residual: i64,
}

/// Slot that absorbs rounding residuals: dinner, else the last present slot
#[must_use]
pub fn residual_slot(meals: &BTreeMap<MealSlot, MealEntry>) -> Option<MealSlot> {
    if meals.contains_key(&MealSlot::Dinner) {
        Some(MealSlot::Dinner)
    } else {
        meals.keys().next_back().copied()
    }
}

fn scaled(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round().max(0.0) as u32
}

/// One nutrient pass; returns (factor applied, residual added)
fn normalize_nutrient(
    meals: &mut BTreeMap<MealSlot, MealEntry>,
    target: u32,
    tolerance: f64,
    get: fn(&MealEntry) -> u32,
    set: fn(&mut MealEntry, u32),
) -> (Option<f64>, i64) {
    let Some(slot) = residual_slot(meals) else {
        return (None, 0);
    };

    let sum: u64 = meals.values().map(|m| u64::from(get(m))).sum();
    let mut factor = None;
    if sum == 0 {
        let share = target / meals.len() as u32;
        for meal in meals.values_mut() {
            set(meal, share);
        }
    } else {
        let deviation = (sum as f64 - f64::from(target)).abs() / f64::from(target.max(1));
        if deviation > tolerance {
            let f = f64::from(target) / sum as f64;
            for meal in meals.values_mut() {
                set(meal, scaled(get(meal), f));
            }
            factor = Some(f);
        }
    }

    let new_sum: i64 = meals.values().map(|m| i64::from(get(m))).sum();
    let residual = i64::from(target) - new_sum;
    if residual != 0 {
        let receiver = if i64::from(get(&meals[&slot])) + residual >= 0 {
            slot
        } else {
            meals
                .iter()
                .max_by_key(|(_, m)| get(m))
                .map_or(slot, |(s, _)| *s)
        };
        if let Some(meal) = meals.get_mut(&receiver) {
            let adjusted = (i64::from(get(meal)) + residual).max(0);
            set(meal, u32::try_from(adjusted).unwrap_or(u32::MAX));
        }
    }
    (factor, residual)
}

/// Rescale meals so calories and protein sum exactly to `targets`
///
/// Returns a new mapping; the input is left untouched.
#[must_use]
pub fn normalize_meals(
    meals: &BTreeMap<MealSlot, MealEntry>,
    targets: MacroTargets,
    tolerance: f64,
) -> (BTreeMap<MealSlot, MealEntry>, NormalizationReport) {
    let mut normalized = meals.clone();

    let (calorie_factor, calorie_residual) = normalize_nutrient(
        &mut normalized,
        targets.calories,
        tolerance,
        |m| m.calories,
        |m, v| m.calories = v,
    );
    if let Some(f) = calorie_factor {
        for meal in normalized.values_mut() {
            meal.carbs_g = scaled(meal.carbs_g, f);
            meal.fat_g = scaled(meal.fat_g, f);
        }
    }

    let (protein_factor, protein_residual) = normalize_nutrient(
        &mut normalized,
        targets.protein_g,
        tolerance,
        |m| m.protein_g,
        |m, v| m.protein_g = v,
    );

    let report = NormalizationReport {
        calorie_factor,
        protein_factor,
        residual_slot: residual_slot(&normalized),
        calorie_residual,
        protein_residual,
    };
    debug!(
        calorie_factor = ?report.calorie_factor,
        protein_factor = ?report.protein_factor,
        residual_slot = ?report.residual_slot,
        calorie_residual,
        protein_residual,
        "Normalized meal macros"
    );
    (normalized, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::FoodDiet;

    fn meal(calories: u32, protein_g: u32) -> MealEntry {
        MealEntry {
            id: "m".to_owned(),
            name: "m".to_owned(),
            purpose: String::new(),
            diet: FoodDiet::Any,
            calories,
            protein_g,
            carbs_g: 40,
            fat_g: 10,
        }
    }

    #[test]
    fn test_residual_slot_prefers_dinner_then_last() {
        let mut meals = BTreeMap::new();
        assert_eq!(residual_slot(&meals), None);
        meals.insert(MealSlot::Breakfast, meal(1, 1));
        meals.insert(MealSlot::Snack, meal(1, 1));
        assert_eq!(residual_slot(&meals), Some(MealSlot::Snack));
        meals.insert(MealSlot::Dinner, meal(1, 1));
        assert_eq!(residual_slot(&meals), Some(MealSlot::Dinner));
    }

    #[test]
    fn test_within_tolerance_keeps_values_but_fixes_sum() {
        let meals: BTreeMap<_, _> = [
            (MealSlot::Lunch, meal(500, 30)),
            (MealSlot::Dinner, meal(495, 30)),
        ]
        .into_iter()
        .collect();
        let targets = MacroTargets {
            calories: 1000,
            protein_g: 60,
        };
        let (out, report) = normalize_meals(&meals, targets, 0.02);
        assert_eq!(report.calorie_factor, None);
        assert_eq!(report.calorie_residual, 5);
        assert_eq!(out[&MealSlot::Lunch].calories, 500);
        assert_eq!(out[&MealSlot::Dinner].calories, 500);
        assert_eq!(out[&MealSlot::Lunch].carbs_g, 40);
    }

    #[test]
    fn test_zero_sum_split_evenly() {
        let meals: BTreeMap<_, _> = MealSlot::ALL.iter().map(|s| (*s, meal(0, 0))).collect();
        let targets = MacroTargets {
            calories: 2001,
            protein_g: 101,
        };
        let (out, _) = normalize_meals(&meals, targets, 0.02);
        assert_eq!(out[&MealSlot::Breakfast].calories, 500);
        assert_eq!(out[&MealSlot::Dinner].calories, 501);
        assert_eq!(out.values().map(|m| m.protein_g).sum::<u32>(), 101);
    }

    #[test]
    fn test_carbs_and_fat_follow_calorie_factor() {
        let meals: BTreeMap<_, _> = [(MealSlot::Dinner, meal(1000, 50))].into_iter().collect();
        let targets = MacroTargets {
            calories: 2000,
            protein_g: 50,
        };
        let (out, report) = normalize_meals(&meals, targets, 0.02);
        assert!(report.calorie_factor.is_some());
        assert_eq!(report.protein_factor, None);
        assert_eq!(out[&MealSlot::Dinner].carbs_g, 80);
        assert_eq!(out[&MealSlot::Dinner].fat_g, 20);
    }
}
