// ABOUTME: Subcommand handlers for fitplan-cli
// ABOUTME: Each handler loads its inputs, runs the engine, and returns pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use fitplan::catalog::{load_exercise_catalog, load_food_catalog, load_history, load_profile};
use fitplan::classifier::MealCatalog;
use fitplan::config::EngineConfig;
use fitplan::models::{RecentHistory, WorkoutCategory};
use fitplan::target_calculator::calculate_energy_breakdown;
use fitplan::PlanEngine;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng};
use std::path::Path;
use tracing::info;

fn engine(seed: Option<u64>) -> PlanEngine<StdRng> {
    let config = EngineConfig::global().clone();
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    info!(seed, "Plan engine ready");
    PlanEngine::seeded(config, seed)
}

fn history(path: Option<&Path>, capacity: usize) -> Result<RecentHistory> {
    Ok(match path {
        Some(path) => load_history(path, capacity)?,
        None => RecentHistory::with_capacity(capacity),
    })
}

pub fn workout(
    profile: &Path,
    catalog: &Path,
    category: Option<&str>,
    history_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<String> {
    let profile = load_profile(profile)?;
    let catalog = load_exercise_catalog(catalog)?;
    let category = category.map(str::parse::<WorkoutCategory>).transpose()?;

    let mut engine = engine(seed);
    let recent = history(history_path, engine.config().history_capacity)?;
    let plan = engine.generate_workout(&profile, &recent, category, &catalog);
    Ok(serde_json::to_string_pretty(&plan)?)
}

pub fn diet(
    profile: &Path,
    foods: Option<&Path>,
    history_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<String> {
    let profile = load_profile(profile)?;

    let mut engine = engine(seed);
    if let Some(foods) = foods {
        engine = engine.with_meal_catalog(MealCatalog::from_items(load_food_catalog(foods)?));
    }
    let recent = history(history_path, engine.config().history_capacity)?;
    let plan = engine.generate_diet(&profile, &recent);
    Ok(serde_json::to_string_pretty(&plan)?)
}

pub fn targets(profile: &Path) -> Result<String> {
    let profile = load_profile(profile)?;
    let breakdown = calculate_energy_breakdown(&profile, &EngineConfig::global().energy);
    Ok(serde_json::to_string_pretty(&breakdown)?)
}
