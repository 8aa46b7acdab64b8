// ABOUTME: Plan engine facade exposing generate_workout and generate_diet to callers
// ABOUTME: Bundles configuration, the meal catalog, and an injected RNG behind one value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Engine
//!
//! [`PlanEngine`] is the entry point the HTTP layer (or the CLI) calls. It
//! owns no per-user state: the caller keeps each user's [`RecentHistory`]
//! and passes it back on every request.
//!
//! ```text
//! let mut engine = PlanEngine::seeded(EngineConfig::default(), 7);
//! let plan = engine.generate_workout(&profile, &history, None, &catalog);
//! record_workout(&mut history, &plan);
//! ```

use fitplan_core::models::{
    DietPlan, ExerciseItem, RecentHistory, UserProfile, WorkoutCategory, WorkoutPlan,
};
use fitplan_intelligence::classifier::{classify_exercises, ExerciseBuckets, MealCatalog};
use fitplan_intelligence::config::EngineConfig;
use fitplan_intelligence::diet_composer::compose_diet;
use fitplan_intelligence::meal_catalog::builtin_meal_catalog;
use fitplan_intelligence::target_calculator::{calculate_energy_breakdown, EnergyBreakdown};
use fitplan_intelligence::workout_composer::compose_workout;
use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

/// Plan generation entry point
#[derive(Debug, Clone)]
pub struct PlanEngine<R: Rng> {
    config: EngineConfig,
    meals: MealCatalog,
    rng: R,
}

impl<R: Rng> PlanEngine<R> {
    /// Create an engine over the built-in meal catalog
    #[must_use]
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            meals: builtin_meal_catalog().clone(),
            rng,
        }
    }

    /// Replace the meal catalog used by [`Self::generate_diet`]
    #[must_use]
    pub fn with_meal_catalog(mut self, meals: MealCatalog) -> Self {
        self.meals = meals;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Active meal catalog
    #[must_use]
    pub const fn meal_catalog(&self) -> &MealCatalog {
        &self.meals
    }

    /// Energy and protein targets with every intermediate value
    #[must_use]
    pub fn targets(&self, profile: &UserProfile) -> EnergyBreakdown {
        calculate_energy_breakdown(profile, &self.config.energy)
    }

    /// Generate a workout from a flat exercise catalog
    ///
    /// The catalog is classified on every call; use
    /// [`Self::generate_workout_from_buckets`] to reuse a classification.
    pub fn generate_workout(
        &mut self,
        profile: &UserProfile,
        recent_exercises: &RecentHistory,
        category_override: Option<WorkoutCategory>,
        catalog: &[ExerciseItem],
    ) -> WorkoutPlan {
        let buckets = classify_exercises(catalog);
        self.generate_workout_from_buckets(profile, recent_exercises, category_override, &buckets)
    }

    /// Generate a workout from an already classified catalog
    pub fn generate_workout_from_buckets(
        &mut self,
        profile: &UserProfile,
        recent_exercises: &RecentHistory,
        category_override: Option<WorkoutCategory>,
        buckets: &ExerciseBuckets,
    ) -> WorkoutPlan {
        compose_workout(
            profile,
            recent_exercises,
            category_override,
            buckets,
            &self.config,
            &mut self.rng,
        )
    }

    /// Generate a diet from the engine's meal catalog
    pub fn generate_diet(
        &mut self,
        profile: &UserProfile,
        recent_meals: &RecentHistory,
    ) -> DietPlan {
        compose_diet(
            profile,
            recent_meals,
            &self.meals,
            &self.config,
            &mut self.rng,
        )
    }

    /// Empty history sized by the configured capacity
    #[must_use]
    pub fn new_history(&self) -> RecentHistory {
        RecentHistory::with_capacity(self.config.history_capacity)
    }
}

impl PlanEngine<StdRng> {
    /// Engine with a reproducible RNG
    #[must_use]
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl PlanEngine<ThreadRng> {
    /// Engine using the global configuration and the thread-local RNG
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EngineConfig::global().clone(), thread_rng())
    }
}

/// Generate a workout with the global configuration and a thread-local RNG
#[must_use]
pub fn generate_workout(
    profile: &UserProfile,
    recent_exercises: &RecentHistory,
    category_override: Option<WorkoutCategory>,
    catalog: &[ExerciseItem],
) -> WorkoutPlan {
    let buckets = classify_exercises(catalog);
    compose_workout(
        profile,
        recent_exercises,
        category_override,
        &buckets,
        EngineConfig::global(),
        &mut thread_rng(),
    )
}

/// Generate a diet from the built-in meal catalog with the global configuration
#[must_use]
pub fn generate_diet(profile: &UserProfile, recent_meals: &RecentHistory) -> DietPlan {
    compose_diet(
        profile,
        recent_meals,
        builtin_meal_catalog(),
        EngineConfig::global(),
        &mut thread_rng(),
    )
}

/// Remember a workout's exercises so the next plan avoids them
pub fn record_workout(history: &mut RecentHistory, plan: &WorkoutPlan) {
    history.extend(plan.exercise_names());
}

/// Remember a diet's meals so the next plan avoids them
pub fn record_diet(history: &mut RecentHistory, plan: &DietPlan) {
    history.extend(plan.meal_names());
}
