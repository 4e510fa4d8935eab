// ABOUTME: Food logging models for calorie and macronutrient tracking
// ABOUTME: FoodRecord, MealCategory and PortionUnit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal slot a food record was logged under
///
/// Declaration order is the display order, so `Ord` sorts breakfast first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast
    Breakfast,
    /// Snack between breakfast and lunch
    MorningSnack,
    /// Lunch
    Lunch,
    /// Snack between lunch and dinner
    AfternoonSnack,
    /// Dinner
    Dinner,
    /// Snack after dinner
    EveningSnack,
    /// Anything not tied to a meal slot
    Other,
}

impl MealCategory {
    /// Every category, in display order
    pub const ALL: [Self; 7] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
        Self::EveningSnack,
        Self::Other,
    ];

    /// The three main meals
    #[must_use]
    pub const fn main_meals() -> [Self; 3] {
        [Self::Breakfast, Self::Lunch, Self::Dinner]
    }

    /// Snack slots
    #[must_use]
    pub const fn snacks() -> [Self; 3] {
        [Self::MorningSnack, Self::AfternoonSnack, Self::EveningSnack]
    }

    /// Categories shown in a day view (`Other` is not listed)
    #[must_use]
    pub const fn ordered_for_display() -> [Self; 6] {
        [
            Self::Breakfast,
            Self::MorningSnack,
            Self::Lunch,
            Self::AfternoonSnack,
            Self::Dinner,
            Self::EveningSnack,
        ]
    }

    /// Whether this is one of the three main meals
    #[must_use]
    pub const fn is_main_meal(self) -> bool {
        matches!(self, Self::Breakfast | Self::Lunch | Self::Dinner)
    }

    /// Default time window as `(start_hour, end_hour)`, end exclusive, 24-hour clock
    #[must_use]
    pub const fn default_hours(self) -> (u32, u32) {
        match self {
            Self::Breakfast => (6, 10),
            Self::MorningSnack => (10, 12),
            Self::Lunch => (12, 14),
            Self::AfternoonSnack => (14, 17),
            Self::Dinner => (17, 21),
            Self::EveningSnack => (21, 23),
            Self::Other => (0, 24),
        }
    }

    /// Suggested category for a logging hour
    ///
    /// Hours outside every specific window fall back to `Other`.
    #[must_use]
    pub fn suggested_for_hour(hour: u32) -> Self {
        Self::ordered_for_display()
            .into_iter()
            .find(|category| {
                let (start, end) = category.default_hours();
                hour >= start && hour < end
            })
            .unwrap_or(Self::Other)
    }
}

/// Unit a portion size is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PortionUnit {
    /// Grams
    #[default]
    Grams,
    /// Milliliters
    Milliliters,
    /// Pieces
    Pieces,
    /// Cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
    /// Slices
    Slices,
    /// Servings
    Servings,
}

impl PortionUnit {
    /// Short unit label
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::Pieces => "pcs",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Slices => "slice",
            Self::Servings => "srv",
        }
    }
}

/// A single logged food item
///
/// Nutrition fields are optional: an absent value contributes nothing to daily
/// totals and is distinct from an explicit zero only for
/// [`has_nutrition_info`](Self::has_nutrition_info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Record identifier
    pub id: Uuid,
    /// When the food was eaten
    pub date: DateTime<Utc>,
    /// Meal slot
    pub meal_category: MealCategory,
    /// Food name
    pub food_name: String,
    /// Portion size in `portion_unit`
    pub portion_size: f64,
    /// Portion unit
    pub portion_unit: PortionUnit,
    /// Energy (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    /// Protein (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Fiber (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Sugar (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
}

impl FoodRecord {
    /// Create a record with no nutrition information and a single-gram portion
    #[must_use]
    pub fn new(date: DateTime<Utc>, meal_category: MealCategory, food_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            meal_category,
            food_name: food_name.into(),
            portion_size: 1.0,
            portion_unit: PortionUnit::default(),
            calories: None,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            fiber_g: None,
            sugar_g: None,
        }
    }

    /// Set the portion
    #[must_use]
    pub const fn with_portion(mut self, size: f64, unit: PortionUnit) -> Self {
        self.portion_size = size;
        self.portion_unit = unit;
        self
    }

    /// Set calories
    #[must_use]
    pub const fn with_calories(mut self, calories: i32) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set protein, carbohydrates and fat in grams
    #[must_use]
    pub const fn with_macros(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_g = Some(protein_g);
        self.carbs_g = Some(carbs_g);
        self.fat_g = Some(fat_g);
        self
    }

    /// Set fiber
    #[must_use]
    pub const fn with_fiber(mut self, fiber_g: f64) -> Self {
        self.fiber_g = Some(fiber_g);
        self
    }

    /// Set sugar
    #[must_use]
    pub const fn with_sugar(mut self, sugar_g: f64) -> Self {
        self.sugar_g = Some(sugar_g);
        self
    }

    /// Calendar day (UTC) the record belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Whether any of calories, protein, carbs or fat is present
    ///
    /// Fiber and sugar alone do not count.
    #[must_use]
    pub const fn has_nutrition_info(&self) -> bool {
        self.calories.is_some()
            || self.protein_g.is_some()
            || self.carbs_g.is_some()
            || self.fat_g.is_some()
    }

    /// Protein + carbs + fat in grams, absent fields counted as zero
    #[must_use]
    pub fn total_macros(&self) -> f64 {
        self.protein_g.unwrap_or(0.0) + self.carbs_g.unwrap_or(0.0) + self.fat_g.unwrap_or(0.0)
    }
}
