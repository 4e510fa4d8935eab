// ABOUTME: Reusable food templates with nutrient density per 100 g or 100 ml
// ABOUTME: Scales nutrients to a portion and produces ready-to-log food records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::food::{FoodRecord, MealCategory, PortionUnit};
use crate::constants::nutrient_density::REFERENCE_QUANTITY;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved food with nutrients stated per 100 g (or 100 ml)
///
/// Portions in grams or milliliters scale directly. Any other unit is treated as
/// a multiple of the default serving, which is taken to be measured in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Item identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Brand, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Energy per 100 (kcal)
    pub calories_per_100: Option<f64>,
    /// Protein per 100 (g)
    pub protein_per_100: Option<f64>,
    /// Carbohydrates per 100 (g)
    pub carbs_per_100: Option<f64>,
    /// Fat per 100 (g)
    pub fat_per_100: Option<f64>,
    /// Fiber per 100 (g)
    pub fiber_per_100: Option<f64>,
    /// Sugar per 100 (g)
    pub sugar_per_100: Option<f64>,
    /// Default serving size in `default_serving_unit`
    pub default_serving_size: f64,
    /// Default serving unit
    pub default_serving_unit: PortionUnit,
}

impl FoodItem {
    /// Create an item without nutrient data
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name and `ValueOutOfRange` unless the
    /// serving size is finite and positive.
    pub fn new(
        name: impl Into<String>,
        default_serving_size: f64,
        default_serving_unit: PortionUnit,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::invalid_input("food item name must not be blank"));
        }
        if !default_serving_size.is_finite() || default_serving_size <= 0.0 {
            return Err(AppError::out_of_range(
                "default_serving_size",
                default_serving_size,
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            brand: None,
            calories_per_100: None,
            protein_per_100: None,
            carbs_per_100: None,
            fat_per_100: None,
            fiber_per_100: None,
            sugar_per_100: None,
            default_serving_size,
            default_serving_unit,
        })
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set energy per 100
    #[must_use]
    pub const fn with_calories_per_100(mut self, calories: f64) -> Self {
        self.calories_per_100 = Some(calories);
        self
    }

    /// Set protein, carbohydrates and fat per 100
    #[must_use]
    pub const fn with_macros_per_100(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_per_100 = Some(protein_g);
        self.carbs_per_100 = Some(carbs_g);
        self.fat_per_100 = Some(fat_g);
        self
    }

    /// Set fiber per 100
    #[must_use]
    pub const fn with_fiber_per_100(mut self, fiber_g: f64) -> Self {
        self.fiber_per_100 = Some(fiber_g);
        self
    }

    /// Set sugar per 100
    #[must_use]
    pub const fn with_sugar_per_100(mut self, sugar_g: f64) -> Self {
        self.sugar_per_100 = Some(sugar_g);
        self
    }

    /// Name with the brand in parentheses when present
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => format!("{} ({brand})", self.name),
            _ => self.name.clone(),
        }
    }

    /// Multiplier from the per-100 values to a portion
    #[must_use]
    pub fn portion_factor(&self, size: f64, unit: PortionUnit) -> f64 {
        match unit {
            PortionUnit::Grams | PortionUnit::Milliliters => size / REFERENCE_QUANTITY,
            _ => size * self.default_serving_size / REFERENCE_QUANTITY,
        }
    }

    fn scaled(&self, per_100: Option<f64>, size: f64, unit: PortionUnit) -> Option<f64> {
        per_100.map(|value| value * self.portion_factor(size, unit))
    }

    /// Energy for a portion (kcal), truncated
    #[must_use]
    pub fn calories_for(&self, size: f64, unit: PortionUnit) -> Option<i32> {
        self.scaled(self.calories_per_100, size, unit)
            .map(|calories| calories as i32)
    }

    /// Protein for a portion (g)
    #[must_use]
    pub fn protein_for(&self, size: f64, unit: PortionUnit) -> Option<f64> {
        self.scaled(self.protein_per_100, size, unit)
    }

    /// Carbohydrates for a portion (g)
    #[must_use]
    pub fn carbs_for(&self, size: f64, unit: PortionUnit) -> Option<f64> {
        self.scaled(self.carbs_per_100, size, unit)
    }

    /// Fat for a portion (g)
    #[must_use]
    pub fn fat_for(&self, size: f64, unit: PortionUnit) -> Option<f64> {
        self.scaled(self.fat_per_100, size, unit)
    }

    /// Food record for a portion, the default serving when `portion` is `None`
    ///
    /// Nutrients missing on the item stay absent on the record.
    #[must_use]
    pub fn to_food_record(
        &self,
        date: DateTime<Utc>,
        meal_category: MealCategory,
        portion: Option<(f64, PortionUnit)>,
    ) -> FoodRecord {
        let (size, unit) =
            portion.unwrap_or((self.default_serving_size, self.default_serving_unit));

        let mut record =
            FoodRecord::new(date, meal_category, self.name.clone()).with_portion(size, unit);
        record.calories = self.calories_for(size, unit);
        record.protein_g = self.protein_for(size, unit);
        record.carbs_g = self.carbs_for(size, unit);
        record.fat_g = self.fat_for(size, unit);
        record.fiber_g = self.scaled(self.fiber_per_100, size, unit);
        record.sugar_g = self.scaled(self.sugar_per_100, size, unit);
        record
    }
}
