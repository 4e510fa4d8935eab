// ABOUTME: Hydration tracking models with per-drink-type hydration factors
// ABOUTME: DrinkRecord and DrinkType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::hydration;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of drink
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    /// Water
    Water,
    /// Coffee
    Coffee,
    /// Tea
    Tea,
    /// Juice
    Juice,
    /// Soft drink
    Soda,
    /// Milk
    Milk,
    /// Beer, wine, spirits
    Alcoholic,
    /// Smoothie
    Smoothie,
    /// Anything else
    Other,
}

impl DrinkType {
    /// Every drink type
    pub const ALL: [Self; 9] = [
        Self::Water,
        Self::Coffee,
        Self::Tea,
        Self::Juice,
        Self::Soda,
        Self::Milk,
        Self::Alcoholic,
        Self::Smoothie,
        Self::Other,
    ];

    /// Fraction of the volume that counts toward hydration (water = 1.0)
    #[must_use]
    pub const fn hydration_factor(self) -> f64 {
        match self {
            Self::Water => hydration::WATER,
            Self::Tea => hydration::TEA,
            Self::Milk => hydration::MILK,
            Self::Juice => hydration::JUICE,
            Self::Smoothie => hydration::SMOOTHIE,
            Self::Coffee => hydration::COFFEE,
            Self::Soda => hydration::SODA,
            Self::Other => hydration::OTHER,
            Self::Alcoholic => hydration::ALCOHOLIC,
        }
    }

    /// Whether the drink is presented as counting toward the water goal
    ///
    /// Soda and `Other` still carry a non-zero factor; this flag is the
    /// product-level classification, the factor is what the totals use.
    #[must_use]
    pub const fn counts_towards_hydration(self) -> bool {
        !matches!(self, Self::Soda | Self::Alcoholic | Self::Other)
    }

    /// Whether this drink typically contains caffeine
    #[must_use]
    pub const fn has_caffeine(self) -> bool {
        matches!(self, Self::Coffee | Self::Tea | Self::Soda)
    }

    /// Whether this drink contains alcohol
    #[must_use]
    pub const fn has_alcohol(self) -> bool {
        matches!(self, Self::Alcoholic)
    }

    /// Typical portion in milliliters
    #[must_use]
    pub const fn default_portion_ml(self) -> f64 {
        match self {
            Self::Water => 250.0,
            Self::Coffee | Self::Alcoholic => 150.0,
            Self::Tea | Self::Juice | Self::Milk | Self::Other => 200.0,
            Self::Soda => 330.0,
            Self::Smoothie => 300.0,
        }
    }
}

/// A single logged drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    /// Record identifier
    pub id: Uuid,
    /// When the drink was consumed
    pub date: DateTime<Utc>,
    /// Drink type
    pub drink_type: DrinkType,
    /// Custom name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Volume in milliliters
    pub amount_ml: f64,
    /// Energy (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    /// Caffeine (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_mg: Option<f64>,
    /// Sugar (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
}

impl DrinkRecord {
    /// Create a drink record
    #[must_use]
    pub fn new(date: DateTime<Utc>, drink_type: DrinkType, amount_ml: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            drink_type,
            name: None,
            amount_ml,
            calories: None,
            caffeine_mg: None,
            sugar_g: None,
        }
    }

    /// Set a custom name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set caffeine content
    #[must_use]
    pub const fn with_caffeine(mut self, caffeine_mg: f64) -> Self {
        self.caffeine_mg = Some(caffeine_mg);
        self
    }

    /// Set calories
    #[must_use]
    pub const fn with_calories(mut self, calories: i32) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Calendar day (UTC) the record belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Volume counted toward the water goal
    #[must_use]
    pub fn effective_hydration(&self) -> f64 {
        self.amount_ml * self.drink_type.hydration_factor()
    }

    /// Caffeinated by type, or by an explicit positive caffeine amount
    #[must_use]
    pub fn has_caffeine(&self) -> bool {
        self.drink_type.has_caffeine() || self.caffeine_mg.unwrap_or(0.0) > 0.0
    }

    /// Whether this drink contains alcohol
    #[must_use]
    pub const fn is_alcoholic(&self) -> bool {
        self.drink_type.has_alcohol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydration_factor_table() {
        let expected = [
            (DrinkType::Water, 1.0),
            (DrinkType::Tea, 0.9),
            (DrinkType::Milk, 0.9),
            (DrinkType::Juice, 0.85),
            (DrinkType::Smoothie, 0.85),
            (DrinkType::Coffee, 0.8),
            (DrinkType::Soda, 0.5),
            (DrinkType::Other, 0.5),
            (DrinkType::Alcoholic, 0.0),
        ];
        for (drink, factor) in expected {
            assert!(
                (drink.hydration_factor() - factor).abs() < f64::EPSILON,
                "{drink:?} factor"
            );
        }
    }

    #[test]
    fn test_effective_hydration_applies_factor() {
        let coffee = DrinkRecord::new(Utc::now(), DrinkType::Coffee, 150.0);
        assert!((coffee.effective_hydration() - 120.0).abs() < 1e-9);

        let wine = DrinkRecord::new(Utc::now(), DrinkType::Alcoholic, 150.0);
        assert!(wine.effective_hydration().abs() < f64::EPSILON);
        assert!(wine.is_alcoholic());
    }

    #[test]
    fn test_caffeine_from_content() {
        let decaf_other = DrinkRecord::new(Utc::now(), DrinkType::Other, 250.0);
        assert!(!decaf_other.has_caffeine());
        assert!(decaf_other.with_caffeine(80.0).has_caffeine());
    }
}
