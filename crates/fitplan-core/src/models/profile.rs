// ABOUTME: User profile model and the closed enums parsed from free-form profile labels
// ABOUTME: Goal, ExperienceLevel, DietType, and Sex each carry an explicit default arm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::catalog::{EquipmentKind, FoodDiet};

/// Any JSON value a profile field may arrive as
///
/// Onboarding payloads are loosely typed: numbers show up as strings,
/// labels as `null`, lists as a single string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Number(f64),
    Text(String),
    List(Vec<LooseValue>),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl LooseValue {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::List(_) | Self::Other(_) => None,
        }
    }

    fn into_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::List(_) | Self::Other(_) => None,
        }
    }
}

/// Deserialize a label enum through its lossy `from_label` parser so that
/// onboarding strings such as `"Muscle Gain"` or `"non-veg"` are accepted.
/// `null` and non-string values fall back to the enum's default.
macro_rules! deserialize_from_label {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = Option::<LooseValue>::deserialize(deserializer)?
                    .and_then(LooseValue::into_text);
                Ok(label.map_or_else(Self::default, |label| Self::from_label(&label)))
            }
        }
    };
}

/// Label set field: `null` is empty, a bare string is one label, and
/// non-string entries are dropped
fn loose_labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<String>, D::Error> {
    Ok(match Option::<LooseValue>::deserialize(deserializer)? {
        Some(LooseValue::Text(label)) => BTreeSet::from([label]),
        Some(LooseValue::List(items)) => {
            items.into_iter().filter_map(LooseValue::into_text).collect()
        }
        Some(LooseValue::Number(_) | LooseValue::Other(_)) | None => BTreeSet::new(),
    })
}

/// Measurement field: numbers and numeric strings are kept, anything else is
/// treated as missing
fn loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<LooseValue>::deserialize(deserializer)?.and_then(LooseValue::into_number))
}

/// Session length in whole minutes; negative or non-finite values are missing
fn loose_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(loose_number(deserializer)?
        .filter(|minutes| (0.0..=f64::from(u32::MAX)).contains(minutes))
        .map(|minutes| minutes.round() as u32))
}

/// Normalise a label for substring matching: lowercase, separators dropped
fn squash(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Training goal driving energy targets, workout category, and diet tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric surplus, hypertrophy rep ranges
    MuscleGain,
    /// Caloric deficit, high protein
    WeightLoss,
    /// Maintenance; the fallback for unknown goal labels
    #[default]
    GeneralFitness,
    /// Moderate surplus, strength focus
    Strength,
}

impl Goal {
    /// Parse a free-form goal label, falling back to `GeneralFitness`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let s = squash(label);
        if s.contains("loss") || s.contains("lose") || s.contains("fat") || s.contains("cut") {
            Self::WeightLoss
        } else if s.contains("muscle")
            || s.contains("gain")
            || s.contains("bulk")
            || s.contains("hypertrophy")
        {
            Self::MuscleGain
        } else if s.contains("strength") || s.contains("power") {
            Self::Strength
        } else {
            Self::GeneralFitness
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MuscleGain => "Muscle Gain",
            Self::WeightLoss => "Weight Loss",
            Self::GeneralFitness => "General Fitness",
            Self::Strength => "Strength",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

deserialize_from_label!(Goal);

/// Training experience, selecting the TDEE activity factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to training; the default when no level is given
    #[default]
    Beginner,
    /// Training consistently for months
    Intermediate,
    /// Years of structured training
    Advanced,
    /// A level label was supplied but not recognised
    Unspecified,
}

impl ExperienceLevel {
    /// Parse a free-form level label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let s = squash(label);
        if s.contains("begin") || s.contains("novice") || s.contains("new") {
            Self::Beginner
        } else if s.contains("inter") {
            Self::Intermediate
        } else if s.contains("adv") || s.contains("expert") || s.contains("elite") {
            Self::Advanced
        } else {
            Self::Unspecified
        }
    }

    /// Display label, used as workout difficulty
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Unspecified => "All Levels",
        }
    }
}

deserialize_from_label!(ExperienceLevel);

/// Dietary preference of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// No meat, fish, or eggs; the fallback for unknown labels
    #[default]
    Vegetarian,
    /// Includes meat and fish
    NonVegetarian,
    /// No animal products
    Vegan,
    /// Vegetarian plus eggs
    Eggetarian,
}

impl DietType {
    /// Parse a free-form diet label by substring matching
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let s = squash(label);
        if s.contains("non") || s.contains("meat") || s.contains("omni") {
            Self::NonVegetarian
        } else if s.contains("vegan") || s.contains("plantbased") {
            Self::Vegan
        } else if s.contains("egg") {
            Self::Eggetarian
        } else {
            Self::Vegetarian
        }
    }

    /// Catalog partition this diet draws meals from
    #[must_use]
    pub const fn meal_partition(self) -> FoodDiet {
        match self {
            Self::NonVegetarian => FoodDiet::NonVegetarian,
            Self::Vegan => FoodDiet::Vegan,
            Self::Vegetarian | Self::Eggetarian => FoodDiet::Vegetarian,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegan => "Vegan",
            Self::Eggetarian => "Eggetarian",
        }
    }
}

deserialize_from_label!(DietType);

/// Biological sex for the resting energy equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male offset (+5 kcal)
    #[default]
    Male,
    /// Female offset (-161 kcal)
    Female,
}

impl Sex {
    /// Parse a free-form sex/gender label, defaulting to `Male`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let s = squash(label);
        if s.starts_with('f') || s.starts_with('w') {
            Self::Female
        } else {
            Self::Male
        }
    }
}

deserialize_from_label!(Sex);

/// Caller-supplied user profile
///
/// Every field is optional on the wire, and a field holding `null` or a value
/// of the wrong shape reads as missing. The engine never mutates a profile;
/// implausible numbers are replaced with defaults at calculation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Training goal
    pub goal: Goal,
    /// Training experience
    #[serde(alias = "experienceLevel", alias = "fitness_level")]
    pub experience_level: ExperienceLevel,
    /// Dietary preference
    #[serde(alias = "dietType")]
    pub diet_type: DietType,
    /// Allergy keywords; foods mentioning any of them are never selected
    #[serde(deserialize_with = "loose_labels")]
    pub allergies: BTreeSet<String>,
    /// Equipment labels the user has access to
    #[serde(deserialize_with = "loose_labels")]
    pub equipment: BTreeSet<String>,
    /// Body weight in kilograms
    #[serde(alias = "bodyWeightKg", alias = "weight", deserialize_with = "loose_number")]
    pub body_weight_kg: Option<f64>,
    /// Height in centimetres
    #[serde(alias = "heightCm", alias = "height", deserialize_with = "loose_number")]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(deserialize_with = "loose_number")]
    pub age: Option<f64>,
    /// Biological sex
    #[serde(alias = "gender")]
    pub sex: Sex,
    /// Preferred session length
    #[serde(alias = "sessionMinutes", deserialize_with = "loose_minutes")]
    pub session_minutes: Option<u32>,
}

impl UserProfile {
    /// Equipment the user owns, parsed into kinds
    ///
    /// Bodyweight is always included.
    #[must_use]
    pub fn equipment_kinds(&self) -> BTreeSet<EquipmentKind> {
        let mut kinds: BTreeSet<EquipmentKind> = self
            .equipment
            .iter()
            .map(|label| EquipmentKind::from_label(label))
            .collect();
        kinds.insert(EquipmentKind::BodyWeight);
        kinds
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_labels() {
        assert_eq!(Goal::from_label("Muscle Gain"), Goal::MuscleGain);
        assert_eq!(Goal::from_label("weight_loss"), Goal::WeightLoss);
        assert_eq!(Goal::from_label("Fat Loss"), Goal::WeightLoss);
        assert_eq!(Goal::from_label("STRENGTH"), Goal::Strength);
        assert_eq!(Goal::from_label("stay active"), Goal::GeneralFitness);
    }

    #[test]
    fn test_diet_labels() {
        assert_eq!(DietType::from_label("Non-Vegetarian"), DietType::NonVegetarian);
        assert_eq!(DietType::from_label("non veg"), DietType::NonVegetarian);
        assert_eq!(DietType::from_label("Vegan"), DietType::Vegan);
        assert_eq!(DietType::from_label("Eggetarian"), DietType::Eggetarian);
        assert_eq!(DietType::from_label("pescatarian?"), DietType::Vegetarian);
        assert_eq!(DietType::Eggetarian.meal_partition(), FoodDiet::Vegetarian);
    }

    #[test]
    fn test_level_missing_vs_unrecognised() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);

        let profile: UserProfile =
            serde_json::from_str(r#"{"experienceLevel": "weekend warrior"}"#).unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Unspecified);
    }

    #[test]
    fn test_profile_accepts_camel_case_aliases() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"goal": "Muscle Gain", "dietType": "Non-Vegetarian", "bodyWeightKg": 82.5,
                "heightCm": 180, "sex": "female", "equipment": ["Dumbbells"]}"#,
        )
        .unwrap();
        assert_eq!(profile.goal, Goal::MuscleGain);
        assert_eq!(profile.diet_type, DietType::NonVegetarian);
        assert_eq!(profile.body_weight_kg, Some(82.5));
        assert_eq!(profile.sex, Sex::Female);
        assert!(profile.equipment_kinds().contains(&EquipmentKind::Dumbbell));
        assert!(profile.equipment_kinds().contains(&EquipmentKind::BodyWeight));
    }

    #[test]
    fn test_profile_nulls_fall_back_to_defaults() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"goal": null, "sex": null, "experienceLevel": null, "dietType": null,
                "equipment": null, "allergies": null, "age": null, "weight": null}"#,
        )
        .unwrap();
        assert_eq!(profile.goal, Goal::GeneralFitness);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert_eq!(profile.diet_type, DietType::Vegetarian);
        assert!(profile.equipment.is_empty());
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.age, None);
        assert_eq!(profile.body_weight_kg, None);
    }

    #[test]
    fn test_profile_numeric_strings_and_wrong_shapes() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"age": "25", "height": " 175.5 ", "weight": "heavy", "sessionMinutes": "45",
                "goal": 7, "equipment": "Dumbbells", "allergies": ["peanut", 3, null],
                "sex": {"value": "female"}}"#,
        )
        .unwrap();
        assert_eq!(profile.age, Some(25.0));
        assert_eq!(profile.height_cm, Some(175.5));
        assert_eq!(profile.body_weight_kg, None);
        assert_eq!(profile.session_minutes, Some(45));
        assert_eq!(profile.goal, Goal::GeneralFitness);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.equipment, BTreeSet::from(["Dumbbells".to_owned()]));
        assert_eq!(profile.allergies, BTreeSet::from(["peanut".to_owned()]));

        let negative: UserProfile = serde_json::from_str(r#"{"sessionMinutes": -30}"#).unwrap();
        assert_eq!(negative.session_minutes, None);
    }
}
