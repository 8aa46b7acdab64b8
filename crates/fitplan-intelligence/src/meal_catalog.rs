// ABOUTME: Built-in meal catalog pre-partitioned by meal slot and diet type
// ABOUTME: Used by the diet composer when the caller supplies no food catalog of its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use crate::classifier::MealCatalog;
use fitplan_core::models::{FoodDiet, FoodItem, MealSlot};
use std::sync::OnceLock;

/// Cached built-in catalog, partitioned once per process
static BUILTIN_CATALOG: OnceLock<MealCatalog> = OnceLock::new();

/// Static food record; converted to [`FoodItem`] when the catalog is built
struct BuiltinMeal {
    id: &'static str,
    name: &'static str,
    slot: MealSlot,
    diet: FoodDiet,
    /// kcal, protein g, carbs g, fat g
    macros: (u32, u32, u32, u32),
    tags: &'static [&'static str],
    allergens: &'static [&'static str],
}

use FoodDiet::{Any, NonVegetarian as NonVeg, Vegan, Vegetarian as Veg};
use MealSlot::{Breakfast, Dinner, Lunch, Snack};

#[rustfmt::skip]
const MEALS: &[BuiltinMeal] = &[
    // Breakfast
    BuiltinMeal { id: "bf-veg-poha", name: "Poha with Peanuts and Curd", slot: Breakfast, diet: Veg, macros: (420, 14, 62, 13), tags: &["rice flakes", "peanuts"], allergens: &["peanut", "dairy"] },
    BuiltinMeal { id: "bf-veg-paratha", name: "Paneer Paratha with Curd", slot: Breakfast, diet: Veg, macros: (520, 24, 58, 21), tags: &["paneer", "wheat"], allergens: &["dairy", "gluten"] },
    BuiltinMeal { id: "bf-veg-chilla", name: "Moong Dal Chilla with Mint Chutney", slot: Breakfast, diet: Veg, macros: (380, 22, 48, 10), tags: &["lentils"], allergens: &[] },
    BuiltinMeal { id: "bf-veg-idli", name: "Idli Sambar", slot: Breakfast, diet: Veg, macros: (360, 13, 66, 5), tags: &["rice", "lentils"], allergens: &[] },
    BuiltinMeal { id: "bf-veg-oats", name: "Masala Oats with Milk", slot: Breakfast, diet: Veg, macros: (400, 18, 56, 11), tags: &["oats"], allergens: &["dairy", "gluten"] },
    BuiltinMeal { id: "bf-nv-bhurji", name: "Egg Bhurji with Multigrain Toast", slot: Breakfast, diet: NonVeg, macros: (450, 27, 38, 20), tags: &["eggs", "bread"], allergens: &["egg", "gluten"] },
    BuiltinMeal { id: "bf-nv-omelette", name: "Masala Omelette with Paratha", slot: Breakfast, diet: NonVeg, macros: (540, 26, 48, 26), tags: &["eggs", "wheat"], allergens: &["egg", "gluten"] },
    BuiltinMeal { id: "bf-nv-sandwich", name: "Grilled Chicken Sandwich", slot: Breakfast, diet: NonVeg, macros: (480, 34, 44, 16), tags: &["chicken", "bread"], allergens: &["gluten"] },
    BuiltinMeal { id: "bf-nv-keema", name: "Chicken Keema Poha", slot: Breakfast, diet: NonVeg, macros: (500, 30, 58, 14), tags: &["chicken", "rice flakes"], allergens: &[] },
    BuiltinMeal { id: "bf-vg-tofu", name: "Tofu Scramble with Roti", slot: Breakfast, diet: Vegan, macros: (430, 24, 46, 15), tags: &["tofu", "wheat"], allergens: &["soy", "gluten"] },
    BuiltinMeal { id: "bf-vg-besan", name: "Besan Chilla with Tomato Chutney", slot: Breakfast, diet: Vegan, macros: (370, 18, 50, 10), tags: &["chickpea flour"], allergens: &[] },
    BuiltinMeal { id: "bf-vg-oats", name: "Peanut Butter Oats with Soy Milk", slot: Breakfast, diet: Vegan, macros: (480, 20, 58, 18), tags: &["oats", "peanut butter"], allergens: &["peanut", "soy", "gluten"] },
    BuiltinMeal { id: "bf-vg-upma", name: "Vegetable Upma", slot: Breakfast, diet: Vegan, macros: (350, 9, 60, 8), tags: &["semolina"], allergens: &["gluten"] },
    // Lunch
    BuiltinMeal { id: "ln-veg-rajma", name: "Rajma Chawal with Salad", slot: Lunch, diet: Veg, macros: (620, 24, 102, 12), tags: &["kidney beans", "rice"], allergens: &[] },
    BuiltinMeal { id: "ln-veg-paneer", name: "Paneer Tikka Rice Bowl", slot: Lunch, diet: Veg, macros: (680, 36, 74, 26), tags: &["paneer", "rice"], allergens: &["dairy"] },
    BuiltinMeal { id: "ln-veg-dal", name: "Dal Tadka with Jeera Rice", slot: Lunch, diet: Veg, macros: (580, 22, 96, 11), tags: &["lentils", "rice"], allergens: &[] },
    BuiltinMeal { id: "ln-veg-chole", name: "Chole with Roti and Raita", slot: Lunch, diet: Veg, macros: (640, 25, 92, 18), tags: &["chickpeas", "wheat"], allergens: &["gluten", "dairy"] },
    BuiltinMeal { id: "ln-nv-curry", name: "Chicken Curry with Brown Rice", slot: Lunch, diet: NonVeg, macros: (690, 45, 72, 22), tags: &["chicken", "rice"], allergens: &[] },
    BuiltinMeal { id: "ln-nv-fish", name: "Fish Curry with Rice", slot: Lunch, diet: NonVeg, macros: (620, 40, 70, 18), tags: &["fish", "rice"], allergens: &["fish"] },
    BuiltinMeal { id: "ln-nv-biryani", name: "Chicken Biryani with Raita", slot: Lunch, diet: NonVeg, macros: (740, 42, 86, 24), tags: &["chicken", "rice"], allergens: &["dairy"] },
    BuiltinMeal { id: "ln-nv-egg", name: "Egg Curry with Roti", slot: Lunch, diet: NonVeg, macros: (600, 30, 64, 24), tags: &["eggs", "wheat"], allergens: &["egg", "gluten"] },
    BuiltinMeal { id: "ln-vg-chana", name: "Chana Masala with Brown Rice", slot: Lunch, diet: Vegan, macros: (610, 23, 98, 13), tags: &["chickpeas", "rice"], allergens: &[] },
    BuiltinMeal { id: "ln-vg-tofu", name: "Tofu Stir Fry with Quinoa", slot: Lunch, diet: Vegan, macros: (580, 32, 62, 20), tags: &["tofu", "quinoa"], allergens: &["soy"] },
    BuiltinMeal { id: "ln-vg-rajma", name: "Rajma with Millet Roti", slot: Lunch, diet: Vegan, macros: (590, 24, 94, 11), tags: &["kidney beans", "millet"], allergens: &[] },
    // Dinner
    BuiltinMeal { id: "dn-veg-palak", name: "Palak Paneer with Roti", slot: Dinner, diet: Veg, macros: (560, 30, 48, 26), tags: &["paneer", "spinach", "wheat"], allergens: &["dairy", "gluten"] },
    BuiltinMeal { id: "dn-veg-khichdi", name: "Vegetable Khichdi with Curd", slot: Dinner, diet: Veg, macros: (500, 20, 80, 10), tags: &["rice", "lentils"], allergens: &["dairy"] },
    BuiltinMeal { id: "dn-veg-bhurji", name: "Paneer Bhurji with Multigrain Roti", slot: Dinner, diet: Veg, macros: (590, 34, 46, 28), tags: &["paneer", "wheat"], allergens: &["dairy", "gluten"] },
    BuiltinMeal { id: "dn-nv-grilled", name: "Grilled Chicken with Sauteed Vegetables", slot: Dinner, diet: NonVeg, macros: (520, 48, 28, 22), tags: &["chicken"], allergens: &[] },
    BuiltinMeal { id: "dn-nv-tandoori", name: "Tandoori Fish with Salad", slot: Dinner, diet: NonVeg, macros: (460, 44, 20, 20), tags: &["fish"], allergens: &["fish", "dairy"] },
    BuiltinMeal { id: "dn-nv-keema", name: "Chicken Keema with Roti", slot: Dinner, diet: NonVeg, macros: (610, 42, 52, 24), tags: &["chicken", "wheat"], allergens: &["gluten"] },
    BuiltinMeal { id: "dn-vg-soya", name: "Soya Chunk Curry with Roti", slot: Dinner, diet: Vegan, macros: (540, 38, 58, 14), tags: &["soy", "wheat"], allergens: &["soy", "gluten"] },
    BuiltinMeal { id: "dn-vg-lentil", name: "Lentil Soup with Quinoa", slot: Dinner, diet: Vegan, macros: (480, 24, 72, 9), tags: &["lentils", "quinoa"], allergens: &[] },
    BuiltinMeal { id: "dn-vg-tofu", name: "Tofu Tikka with Roasted Vegetables", slot: Dinner, diet: Vegan, macros: (470, 30, 34, 22), tags: &["tofu"], allergens: &["soy"] },
    // Snacks
    BuiltinMeal { id: "sn-chana", name: "Roasted Chana", slot: Snack, diet: Any, macros: (180, 10, 28, 3), tags: &["chickpeas"], allergens: &[] },
    BuiltinMeal { id: "sn-sprouts", name: "Sprouts Chaat", slot: Snack, diet: Any, macros: (200, 12, 30, 3), tags: &["moong sprouts"], allergens: &[] },
    BuiltinMeal { id: "sn-makhana", name: "Roasted Makhana", slot: Snack, diet: Any, macros: (160, 5, 24, 5), tags: &["fox nuts"], allergens: &[] },
    BuiltinMeal { id: "sn-fruit", name: "Fruit Bowl with Seeds", slot: Snack, diet: Any, macros: (220, 5, 40, 6), tags: &["fruit", "seeds"], allergens: &[] },
    BuiltinMeal { id: "sn-pb-banana", name: "Banana with Peanut Butter", slot: Snack, diet: Any, macros: (290, 9, 36, 14), tags: &["fruit", "peanut butter"], allergens: &["peanut"] },
    BuiltinMeal { id: "sn-yogurt", name: "Greek Yogurt with Berries", slot: Snack, diet: Veg, macros: (210, 18, 24, 5), tags: &["yogurt"], allergens: &["dairy"] },
    BuiltinMeal { id: "sn-eggs", name: "Boiled Eggs with Pepper", slot: Snack, diet: NonVeg, macros: (160, 13, 1, 11), tags: &["eggs"], allergens: &["egg"] },
];

impl BuiltinMeal {
    fn to_item(&self) -> FoodItem {
        let (calories, protein_g, carbs_g, fat_g) = self.macros;
        FoodItem {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            slot: self.slot,
            diet: self.diet,
            calories,
            protein_g,
            carbs_g,
            fat_g,
            tags: self.tags.iter().map(|t| (*t).to_owned()).collect(),
            allergens: self.allergens.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// Built-in foods as a flat list, in catalog order
#[must_use]
pub fn builtin_food_items() -> Vec<FoodItem> {
    MEALS.iter().map(BuiltinMeal::to_item).collect()
}

/// Get the cached built-in meal catalog
pub fn builtin_meal_catalog() -> &'static MealCatalog {
    BUILTIN_CATALOG.get_or_init(|| MealCatalog::from_items(builtin_food_items()))
}
