// ABOUTME: Data model for logged records, food templates, user profile, goals and achievements
// ABOUTME: Re-exports the record types consumed by the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Records are owned by the record store and read-only to the engine.
//! Timestamps are UTC; a record's calendar day is the UTC date of its timestamp.

/// Achievement types, categories and persisted records
pub mod achievement;
/// Drink records and drink types
pub mod drink;
/// Food records, meal categories and portion units
pub mod food;
/// Reusable food templates with per-100 nutrient density
pub mod food_item;
/// User goals
pub mod goals;
/// Body profile, BMI and energy expenditure
pub mod profile;
/// Weight measurements
pub mod weight;

pub use achievement::{
    sort_for_display, Achievement, AchievementCategory, AchievementState, AchievementType,
};
pub use drink::{DrinkRecord, DrinkType};
pub use food::{FoodRecord, MealCategory, PortionUnit};
pub use food_item::FoodItem;
pub use goals::Goals;
pub use profile::{ActivityLevel, BmiCategory, UserProfile};
pub use weight::WeightRecord;
