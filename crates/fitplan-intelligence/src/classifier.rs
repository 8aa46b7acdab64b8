// ABOUTME: Catalog classifier mapping flat exercise and food catalogs into semantic buckets
// ABOUTME: Exercise rules are declarative tables; foods are partitioned by (slot, diet)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Catalog Classifier
//!
//! Exercises are classified in two steps:
//!
//! 1. [`CATEGORY_RULES`] map the catalog category straight to a bucket
//!    (cardio, plyometrics, stretching) or mark it for muscle splitting.
//!    Categories no rule names are split by muscle as well.
//! 2. [`MUSCLE_RULES`] are checked in priority order (core, lower, upper);
//!    the first rule sharing a primary muscle wins, otherwise
//!    [`MUSCLE_FALLBACK`] applies.
//!
//! Foods arrive pre-partitioned by slot and diet, so classification is a
//! lookup keyed by `(slot, diet)`, with a single snack partition for every
//! diet. Both classifications preserve catalog order and are deterministic.

use fitplan_core::models::{ExerciseBucket, ExerciseItem, FoodDiet, FoodItem, MealSlot};
use std::collections::BTreeMap;
use tracing::debug;

/// Where a category rule sends an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// Straight into a bucket
    Bucket(ExerciseBucket),
    /// Split by primary muscle
    ByMuscle,
}

/// Category keyword rule
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Keywords matched as substrings of the lowercased category
    pub keywords: &'static [&'static str],
    /// Destination
    pub target: RuleTarget,
}

/// Muscle membership rule
#[derive(Debug, Clone, Copy)]
pub struct MuscleRule {
    /// Destination bucket
    pub bucket: ExerciseBucket,
    /// Muscle names, lowercase
    pub muscles: &'static [&'static str],
}

/// Category rules, first match wins
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["cardio", "plyometric"],
        target: RuleTarget::Bucket(ExerciseBucket::Cardio),
    },
    CategoryRule {
        keywords: &["stretching"],
        target: RuleTarget::Bucket(ExerciseBucket::Mobility),
    },
    CategoryRule {
        keywords: &["strength", "powerlifting", "weightlifting", "strongman"],
        target: RuleTarget::ByMuscle,
    },
];

/// Muscle rules in priority order: core over lower over upper
pub const MUSCLE_RULES: &[MuscleRule] = &[
    MuscleRule {
        bucket: ExerciseBucket::Core,
        muscles: &["abdominals", "abs", "obliques", "lower back", "core"],
    },
    MuscleRule {
        bucket: ExerciseBucket::Lower,
        muscles: &[
            "quadriceps",
            "hamstrings",
            "glutes",
            "calves",
            "adductors",
            "abductors",
            "hip flexors",
        ],
    },
    MuscleRule {
        bucket: ExerciseBucket::Upper,
        muscles: &[
            "chest",
            "shoulders",
            "biceps",
            "triceps",
            "lats",
            "middle back",
            "traps",
            "forearms",
            "neck",
        ],
    },
];

/// Bucket for strength items no muscle rule matches
pub const MUSCLE_FALLBACK: ExerciseBucket = ExerciseBucket::Upper;

/// Bucket for a single exercise
#[must_use]
pub fn classify_exercise(item: &ExerciseItem) -> ExerciseBucket {
    let category = item.category.trim().to_lowercase();
    let target = CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| category.contains(k)))
        .map_or(RuleTarget::ByMuscle, |rule| rule.target);

    match target {
        RuleTarget::Bucket(bucket) => bucket,
        RuleTarget::ByMuscle => {
            let muscles: Vec<String> = item
                .primary_muscles
                .iter()
                .map(|m| m.trim().to_lowercase())
                .collect();
            MUSCLE_RULES
                .iter()
                .find(|rule| muscles.iter().any(|m| rule.muscles.contains(&m.as_str())))
                .map_or(MUSCLE_FALLBACK, |rule| rule.bucket)
        }
    }
}

/// Exercise catalog grouped by bucket
///
/// Every bucket is present, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseBuckets {
    buckets: BTreeMap<ExerciseBucket, Vec<ExerciseItem>>,
}

impl ExerciseBuckets {
    /// Items in a bucket, in catalog order
    #[must_use]
    pub fn get(&self, bucket: ExerciseBucket) -> &[ExerciseItem] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of items in a bucket
    #[must_use]
    pub fn count(&self, bucket: ExerciseBucket) -> usize {
        self.get(bucket).len()
    }

    /// Total classified items
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether every bucket is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Buckets with their items
    pub fn iter(&self) -> impl Iterator<Item = (ExerciseBucket, &[ExerciseItem])> {
        self.buckets.iter().map(|(b, items)| (*b, items.as_slice()))
    }
}

/// Classify a flat exercise catalog
#[must_use]
pub fn classify_exercises(catalog: &[ExerciseItem]) -> ExerciseBuckets {
    let mut buckets: BTreeMap<ExerciseBucket, Vec<ExerciseItem>> = ExerciseBucket::ALL
        .iter()
        .map(|b| (*b, Vec::new()))
        .collect();
    for item in catalog {
        buckets
            .entry(classify_exercise(item))
            .or_default()
            .push(item.clone());
    }
    debug!(
        upper = buckets[&ExerciseBucket::Upper].len(),
        lower = buckets[&ExerciseBucket::Lower].len(),
        core = buckets[&ExerciseBucket::Core].len(),
        cardio = buckets[&ExerciseBucket::Cardio].len(),
        mobility = buckets[&ExerciseBucket::Mobility].len(),
        "Classified exercise catalog"
    );
    ExerciseBuckets { buckets }
}

/// Food catalog partitioned by meal slot and diet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealCatalog {
    partitions: BTreeMap<(MealSlot, FoodDiet), Vec<FoodItem>>,
}

impl MealCatalog {
    /// Partition key for a slot and diet; snacks share one partition
    #[must_use]
    pub const fn partition_key(slot: MealSlot, diet: FoodDiet) -> (MealSlot, FoodDiet) {
        match slot {
            MealSlot::Snack => (MealSlot::Snack, FoodDiet::Any),
            MealSlot::Breakfast | MealSlot::Lunch | MealSlot::Dinner => (slot, diet),
        }
    }

    /// Partition a flat food catalog
    ///
    /// Non-snack foods tagged [`FoodDiet::Any`] are listed under every diet.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = FoodItem>) -> Self {
        let mut partitions: BTreeMap<(MealSlot, FoodDiet), Vec<FoodItem>> = BTreeMap::new();
        for item in items {
            if item.slot != MealSlot::Snack && item.diet == FoodDiet::Any {
                for diet in [FoodDiet::Vegetarian, FoodDiet::NonVegetarian, FoodDiet::Vegan] {
                    partitions
                        .entry((item.slot, diet))
                        .or_default()
                        .push(item.clone());
                }
            } else {
                partitions
                    .entry(Self::partition_key(item.slot, item.diet))
                    .or_default()
                    .push(item);
            }
        }
        Self { partitions }
    }

    /// Foods available for a slot and diet partition
    #[must_use]
    pub fn bucket(&self, slot: MealSlot, diet: FoodDiet) -> &[FoodItem] {
        self.partitions
            .get(&Self::partition_key(slot, diet))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total stored entries (foods tagged for every diet count once per diet)
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no food at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
