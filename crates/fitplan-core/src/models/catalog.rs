// ABOUTME: Exercise and food catalog records supplied by the catalog store
// ABOUTME: Defines EquipmentKind, ExerciseItem, FoodItem, FoodDiet, and MealSlot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};
use std::{fmt, iter};

/// Anything the item selector can pick and remember by name
pub trait CatalogEntry {
    /// Display name, also the key used for repeat avoidance
    fn name(&self) -> &str;
}

/// Equipment required by an exercise or owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    /// No equipment
    BodyWeight,
    /// Dumbbells
    Dumbbell,
    /// Kettlebells
    Kettlebell,
    /// Barbell or EZ-curl bar
    Barbell,
    /// Selectorised or plate-loaded machine
    Machine,
    /// Cable station
    Cable,
    /// Resistance bands
    Bands,
    /// Medicine ball
    MedicineBall,
    /// Stability ball
    ExerciseBall,
    /// Foam roller
    FoamRoll,
    /// Anything else, keyed by its lowercased label
    Other(String),
}

/// Equipment tier used to label a whole workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentTier {
    /// Nothing heavier than bodyweight and accessories
    Bodyweight,
    /// Dumbbells or kettlebells
    Dumbbells,
    /// Barbells, machines, or cables
    Gym,
}

impl EquipmentTier {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bodyweight => "Bodyweight",
            Self::Dumbbells => "Dumbbells",
            Self::Gym => "Gym",
        }
    }
}

impl EquipmentKind {
    /// Parse an equipment label from a catalog record or profile
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let s = label.trim().to_lowercase();
        match s.as_str() {
            "" | "none" | "body only" | "bodyweight" | "body weight" | "no equipment" => {
                Self::BodyWeight
            }
            _ if s.contains("dumbbell") => Self::Dumbbell,
            _ if s.contains("kettlebell") => Self::Kettlebell,
            _ if s.contains("barbell") || s.contains("curl bar") => Self::Barbell,
            _ if s.contains("machine") || s.contains("smith") => Self::Machine,
            _ if s.contains("cable") => Self::Cable,
            _ if s.contains("band") => Self::Bands,
            _ if s.contains("medicine") => Self::MedicineBall,
            _ if s.contains("exercise ball") || s.contains("stability") || s.contains("swiss") => {
                Self::ExerciseBall
            }
            _ if s.contains("foam") => Self::FoamRoll,
            _ => Self::Other(s),
        }
    }

    /// Parse an optional requirement; a missing requirement is bodyweight
    #[must_use]
    pub fn from_requirement(requirement: Option<&str>) -> Self {
        requirement.map_or(Self::BodyWeight, Self::from_label)
    }

    /// Tier this equipment places a workout in
    #[must_use]
    pub const fn tier(&self) -> EquipmentTier {
        match self {
            Self::Barbell | Self::Machine | Self::Cable => EquipmentTier::Gym,
            Self::Dumbbell | Self::Kettlebell => EquipmentTier::Dumbbells,
            Self::BodyWeight
            | Self::Bands
            | Self::MedicineBall
            | Self::ExerciseBall
            | Self::FoamRoll
            | Self::Other(_) => EquipmentTier::Bodyweight,
        }
    }
}

/// Exercise record from the catalog store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseItem {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Movement category (strength, cardio, stretching, plyometrics, ...)
    #[serde(default)]
    pub category: String,
    /// Required equipment; `None` means bodyweight
    #[serde(default)]
    pub equipment: Option<String>,
    /// Primary muscles worked
    #[serde(default, alias = "primaryMuscles", alias = "primary_tags")]
    pub primary_muscles: Vec<String>,
    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl ExerciseItem {
    /// Parsed equipment requirement
    #[must_use]
    pub fn equipment_kind(&self) -> EquipmentKind {
        EquipmentKind::from_requirement(self.equipment.as_deref())
    }
}

impl CatalogEntry for ExerciseItem {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed daily meal slots, ordered as they are eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between lunch and dinner
    Snack,
    /// Evening meal; receives the normalisation residual
    Dinner,
}

impl MealSlot {
    /// Every slot in eating order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Diet partition a food record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodDiet {
    /// Vegetarian-only partition
    Vegetarian,
    /// Non-vegetarian partition
    NonVegetarian,
    /// Vegan-only partition
    Vegan,
    /// Suitable for every diet
    Any,
}

impl FoodDiet {
    /// Whether a food tagged `self` may be served to a user eating `partition`
    #[must_use]
    pub fn serves(self, partition: Self) -> bool {
        self == Self::Any || self == partition
    }
}

/// Food record from the catalog store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot the record is partitioned under
    pub slot: MealSlot,
    /// Diet partition
    pub diet: FoodDiet,
    /// Energy per serving
    pub calories: u32,
    /// Protein per serving (grams)
    #[serde(alias = "proteinGrams")]
    pub protein_g: u32,
    /// Carbohydrate per serving (grams)
    #[serde(default, alias = "carbGrams")]
    pub carbs_g: u32,
    /// Fat per serving (grams)
    #[serde(default, alias = "fatGrams")]
    pub fat_g: u32,
    /// Food categories or key ingredients
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared allergens
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl FoodItem {
    /// Whether any allergy keyword appears in the name, tags, or allergens
    #[must_use]
    pub fn mentions_any<'a>(&self, allergies: impl IntoIterator<Item = &'a String>) -> bool {
        let haystack: Vec<String> = iter::once(&self.name)
            .chain(&self.tags)
            .chain(&self.allergens)
            .map(|s| s.to_lowercase())
            .collect();
        allergies.into_iter().any(|allergy| {
            let needle = allergy.trim().to_lowercase();
            !needle.is_empty() && haystack.iter().any(|h| h.contains(&needle))
        })
    }
}

impl CatalogEntry for FoodItem {
    fn name(&self) -> &str {
        &self.name
    }
}
