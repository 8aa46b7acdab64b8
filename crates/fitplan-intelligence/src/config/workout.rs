// ABOUTME: Workout composer configuration: sets, rep ranges, rest, and duration estimates
// ABOUTME: Defaults come from fitplan-core workout constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::workout;
use fitplan_core::models::{Goal, RepRange};
use serde::{Deserialize, Serialize};

/// Workout annotation and timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Working sets per exercise
    pub sets: u8,
    /// Rep range for muscle gain
    pub hypertrophy_reps: RepRange,
    /// Rep range for every other goal
    pub standard_reps: RepRange,
    /// Rest between sets
    pub rest_seconds: u16,
    /// Estimated minutes per exercise
    pub minutes_per_exercise: u16,
    /// Fixed warm-up plus cool-down minutes
    pub warmup_cooldown_minutes: u16,
}

impl WorkoutConfig {
    /// Rep range for a goal
    #[must_use]
    pub const fn reps_for(&self, goal: Goal) -> RepRange {
        match goal {
            Goal::MuscleGain => self.hypertrophy_reps,
            Goal::WeightLoss | Goal::GeneralFitness | Goal::Strength => self.standard_reps,
        }
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            sets: workout::SETS_PER_EXERCISE,
            hypertrophy_reps: RepRange {
                min: workout::HYPERTROPHY_REPS.0,
                max: workout::HYPERTROPHY_REPS.1,
            },
            standard_reps: RepRange {
                min: workout::ENDURANCE_REPS.0,
                max: workout::ENDURANCE_REPS.1,
            },
            rest_seconds: workout::REST_SECONDS,
            minutes_per_exercise: workout::MINUTES_PER_EXERCISE,
            warmup_cooldown_minutes: workout::WARMUP_COOLDOWN_MINUTES,
        }
    }
}
