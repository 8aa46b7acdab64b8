// ABOUTME: Workout plan output model, exercise buckets, and workout categories
// ABOUTME: Plans are created fresh per call and carry no identity beyond a timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::EquipmentKind;
use crate::errors::AppError;

/// Movement group an exercise is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseBucket {
    /// Chest, back, shoulders, arms
    Upper,
    /// Legs and glutes
    Lower,
    /// Abdominals and lower back
    Core,
    /// Cardio and plyometrics
    Cardio,
    /// Stretching
    Mobility,
}

impl ExerciseBucket {
    /// Every bucket
    pub const ALL: [Self; 5] = [
        Self::Upper,
        Self::Lower,
        Self::Core,
        Self::Cardio,
        Self::Mobility,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Core => "core",
            Self::Cardio => "cardio",
            Self::Mobility => "mobility",
        }
    }
}

impl fmt::Display for ExerciseBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workout category, each mapping to a fixed recipe of bucket counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    /// Balanced session across every bucket
    FullBody,
    /// Upper-body emphasis
    UpperBody,
    /// Lower-body emphasis
    LowerBody,
    /// Conditioning
    Cardio,
    /// Stretching only
    Mobility,
    /// Trunk emphasis
    Core,
    /// Resolves to upper or lower body per call
    Split,
}

impl WorkoutCategory {
    /// Parse a category label, returning `None` when unrecognised
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let s: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match s.as_str() {
            "fullbody" | "full" | "totalbody" => Some(Self::FullBody),
            "upperbody" | "upper" | "push" | "pull" => Some(Self::UpperBody),
            "lowerbody" | "lower" | "legs" | "legday" => Some(Self::LowerBody),
            "cardio" | "conditioning" | "hiit" => Some(Self::Cardio),
            "mobility" | "stretching" | "flexibility" | "yoga" => Some(Self::Mobility),
            "core" | "abs" => Some(Self::Core),
            "split" => Some(Self::Split),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::Cardio => "Cardio",
            Self::Mobility => "Mobility",
            Self::Core => "Core",
            Self::Split => "Split",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown workout category '{s}'")))
    }
}

/// Inclusive repetition range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub min: u8,
    /// Upper bound
    pub max: u8,
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One exercise in a composed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Bucket the exercise was drawn from
    pub bucket: ExerciseBucket,
    /// Equipment the exercise needs
    pub equipment: EquipmentKind,
    /// Primary muscles
    pub target_muscles: Vec<String>,
    /// Working sets
    pub sets: u8,
    /// Repetitions per set
    pub reps: RepRange,
    /// Rest between sets
    pub rest_seconds: u16,
    /// Coaching instructions
    pub instructions: Vec<String>,
}

/// A composed daily workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Human-readable title
    pub title: String,
    /// Category actually composed (never `Split`)
    pub category: WorkoutCategory,
    /// Free-form tags for display and search
    pub tags: Vec<String>,
    /// Difficulty label taken from the experience level
    pub difficulty: String,
    /// Highest-tier equipment used by any exercise
    pub equipment_label: String,
    /// Estimated session length
    pub total_duration_minutes: u16,
    /// Fixed warm-up routine
    pub warmup: Vec<String>,
    /// Selected exercises in recipe order
    pub exercises: Vec<ExerciseEntry>,
    /// Fixed cool-down routine
    pub cooldown: Vec<String>,
    /// Exercises the category recipe asked for
    pub requested_exercises: usize,
    /// Explanations for shortfalls or repeats
    pub notes: Vec<String>,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Whether no exercise could be selected at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Whether fewer exercises than requested were selected
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.exercises.len() < self.requested_exercises
    }

    /// Names of the selected exercises, for the caller's history
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.exercises.iter().map(|e| e.name.as_str())
    }
}
