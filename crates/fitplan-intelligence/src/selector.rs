// ABOUTME: Item selector picking N catalog items that satisfy a filter, avoiding recent repeats
// ABOUTME: Randomness is injected so callers and tests control the shuffle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Item Selector
//!
//! Selection is a pure function of (pool, filter, history, count, RNG state):
//!
//! 1. keep items passing the filter (equipment or diet/allergy);
//! 2. split them into fresh items and recently used ones;
//! 3. shuffle the fresh items and take up to `count`;
//! 4. if that falls short, shuffle the recent items and top up from them.
//!
//! Fewer than `count` items come back only when the filtered pool itself
//! is too small. That is a short result, not an error.

use fitplan_core::models::{
    CatalogEntry, EquipmentKind, ExerciseItem, FoodDiet, FoodItem, RecentHistory,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Items chosen by [`select_items`] plus the counts behind the choice
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a, T> {
    /// Chosen items
    pub items: Vec<&'a T>,
    /// How many were asked for
    pub requested: usize,
    /// Pool size after filtering, before history is considered
    pub eligible: usize,
    /// Chosen items that were in the history
    pub repeats_used: usize,
}

impl<T> Selection<'_, T> {
    /// Whether fewer items than requested were chosen
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.items.len() < self.requested
    }
}

/// Pick up to `count` items from `pool` that satisfy `predicate`
pub fn select_items<'a, T, P, R>(
    pool: &'a [T],
    predicate: P,
    history: &RecentHistory,
    count: usize,
    rng: &mut R,
) -> Selection<'a, T>
where
    T: CatalogEntry,
    P: Fn(&T) -> bool,
    R: Rng + ?Sized,
{
    let eligible: Vec<&T> = pool.iter().filter(|&item| predicate(item)).collect();
    let eligible_count = eligible.len();
    let (mut fresh, mut recent): (Vec<&T>, Vec<&T>) = eligible
        .into_iter()
        .partition(|item| !history.contains(item.name()));

    fresh.shuffle(rng);
    let mut items: Vec<&T> = fresh.into_iter().take(count).collect();

    let mut repeats_used = 0;
    if items.len() < count && !recent.is_empty() {
        recent.shuffle(rng);
        let needed = count - items.len();
        repeats_used = needed.min(recent.len());
        items.extend(recent.into_iter().take(needed));
    }

    Selection {
        items,
        requested: count,
        eligible: eligible_count,
        repeats_used,
    }
}

/// Filter admitting bodyweight exercises and those whose equipment the user owns
pub fn equipment_filter(owned: &BTreeSet<EquipmentKind>) -> impl Fn(&ExerciseItem) -> bool + '_ {
    move |item| {
        let kind = item.equipment_kind();
        kind == EquipmentKind::BodyWeight || owned.contains(&kind)
    }
}

/// Filter admitting foods served to `partition` that mention no allergy
pub fn diet_filter(
    partition: FoodDiet,
    allergies: &BTreeSet<String>,
) -> impl Fn(&FoodItem) -> bool + '_ {
    move |item| item.diet.serves(partition) && !item.mentions_any(allergies)
}
