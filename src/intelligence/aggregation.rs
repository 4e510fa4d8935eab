// ABOUTME: Daily aggregation of food and drink records into nutrition and hydration totals
// ABOUTME: Goal progress ratios, per-meal grouping and Atwater macro distribution
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Daily aggregation
//!
//! Folds one day of records into a [`DailySummary`]. Optional nutrition fields
//! that are absent contribute nothing; every ratio is guarded so a zero or
//! negative goal yields `0.0` instead of a division by zero.
//!
//! # References
//!
//! - Atwater general factors: protein 4 kcal/g, carbohydrate 4 kcal/g, fat 9 kcal/g
//!   (USDA Agriculture Handbook No. 74, 1973)

use crate::config::MacroBalanceConfig;
use chrono::NaiveDate;
use nutri_core::constants::atwater;
use nutri_core::models::{DrinkRecord, FoodRecord, Goals, MealCategory};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One day of aggregated nutrition and hydration data
///
/// Built fresh from the records passed in and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Food records for the day
    pub food_records: Vec<FoodRecord>,
    /// Drink records for the day
    pub drink_records: Vec<DrinkRecord>,
    /// Goals in effect when the summary was built
    pub goals: Goals,
    /// Sum of present food calories (kcal)
    pub total_calories: i32,
    /// Sum of present protein (g)
    pub total_protein_g: f64,
    /// Sum of present carbohydrates (g)
    pub total_carbs_g: f64,
    /// Sum of present fat (g)
    pub total_fat_g: f64,
    /// Sum of present fiber (g)
    pub total_fiber_g: f64,
    /// Sum of present sugar from food (g)
    pub total_sugar_g: f64,
    /// Raw drink volume (ml)
    pub total_drink_volume_ml: f64,
    /// Hydration after per-drink factors (ml)
    pub effective_hydration_ml: f64,
    /// Sum of present caffeine (mg)
    pub total_caffeine_mg: f64,
}

fn sum_present(values: impl Iterator<Item = Option<f64>>) -> f64 {
    values.flatten().sum()
}

/// `numerator / denominator`, or `0.0` when the denominator is not positive
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

impl DailySummary {
    /// Aggregate one day of records against a goals snapshot
    #[must_use]
    pub fn new(
        date: NaiveDate,
        food_records: Vec<FoodRecord>,
        drink_records: Vec<DrinkRecord>,
        goals: Goals,
    ) -> Self {
        let total_calories = food_records
            .iter()
            .filter_map(|record| record.calories)
            .fold(0_i32, i32::saturating_add);

        Self {
            date,
            total_calories,
            total_protein_g: sum_present(food_records.iter().map(|r| r.protein_g)),
            total_carbs_g: sum_present(food_records.iter().map(|r| r.carbs_g)),
            total_fat_g: sum_present(food_records.iter().map(|r| r.fat_g)),
            total_fiber_g: sum_present(food_records.iter().map(|r| r.fiber_g)),
            total_sugar_g: sum_present(food_records.iter().map(|r| r.sugar_g)),
            total_drink_volume_ml: drink_records.iter().map(|r| r.amount_ml).sum(),
            effective_hydration_ml: drink_records
                .iter()
                .map(DrinkRecord::effective_hydration)
                .sum(),
            total_caffeine_mg: sum_present(drink_records.iter().map(|r| r.caffeine_mg)),
            food_records,
            drink_records,
            goals,
        }
    }

    /// Summary of a day with nothing logged
    #[must_use]
    pub fn empty(date: NaiveDate, goals: Goals) -> Self {
        Self::new(date, Vec::new(), Vec::new(), goals)
    }

    /// Whether at least one food record was logged
    #[must_use]
    pub fn has_food_entries(&self) -> bool {
        !self.food_records.is_empty()
    }

    /// Calories left before the goal, never negative
    #[must_use]
    pub fn calories_remaining(&self) -> i32 {
        self.goals
            .daily_calorie_goal
            .saturating_sub(self.total_calories)
            .max(0)
    }

    /// Whether intake is strictly above the calorie goal
    #[must_use]
    pub const fn is_over_calorie_goal(&self) -> bool {
        self.total_calories > self.goals.daily_calorie_goal
    }

    /// Calories eaten relative to the goal; exceeds 1.0 on overage
    #[must_use]
    pub fn calorie_progress(&self) -> f64 {
        guarded_ratio(
            f64::from(self.total_calories),
            f64::from(self.goals.daily_calorie_goal),
        )
    }

    /// Effective hydration relative to the water goal; exceeds 1.0 on overage
    #[must_use]
    pub fn water_progress(&self) -> f64 {
        guarded_ratio(self.effective_hydration_ml, self.goals.daily_water_goal_ml)
    }

    /// Whether effective hydration reached the water goal
    #[must_use]
    pub fn met_water_goal(&self) -> bool {
        self.water_progress() >= 1.0
    }

    /// Protein relative to its target, `None` without a positive target
    #[must_use]
    pub fn protein_progress(&self) -> Option<f64> {
        macro_progress(self.total_protein_g, self.goals.target_protein_g)
    }

    /// Carbohydrates relative to their target, `None` without a positive target
    #[must_use]
    pub fn carbs_progress(&self) -> Option<f64> {
        macro_progress(self.total_carbs_g, self.goals.target_carbs_g)
    }

    /// Fat relative to its target, `None` without a positive target
    #[must_use]
    pub fn fat_progress(&self) -> Option<f64> {
        macro_progress(self.total_fat_g, self.goals.target_fat_g)
    }

    /// Food records grouped by meal slot, in display order
    #[must_use]
    pub fn entries_by_meal(&self) -> BTreeMap<MealCategory, Vec<&FoodRecord>> {
        let mut grouped: BTreeMap<MealCategory, Vec<&FoodRecord>> = BTreeMap::new();
        for record in &self.food_records {
            grouped.entry(record.meal_category).or_default().push(record);
        }
        grouped
    }

    /// Calorie subtotal per logged meal slot
    #[must_use]
    pub fn calories_by_meal(&self) -> BTreeMap<MealCategory, i32> {
        let mut subtotals: BTreeMap<MealCategory, i32> = BTreeMap::new();
        for record in &self.food_records {
            let subtotal = subtotals.entry(record.meal_category).or_insert(0);
            *subtotal = subtotal.saturating_add(record.calories.unwrap_or(0));
        }
        subtotals
    }

    /// Meal slots with at least one record
    #[must_use]
    pub fn logged_meal_categories(&self) -> BTreeSet<MealCategory> {
        self.food_records
            .iter()
            .map(|record| record.meal_category)
            .collect()
    }

    /// Whether breakfast, lunch and dinner were all logged
    #[must_use]
    pub fn has_logged_all_main_meals(&self) -> bool {
        let logged = self.logged_meal_categories();
        MealCategory::main_meals()
            .iter()
            .all(|meal| logged.contains(meal))
    }

    /// Share of macro calories from protein, carbohydrates and fat
    #[must_use]
    pub fn macro_distribution(&self) -> MacroDistribution {
        MacroDistribution::from_grams(self.total_protein_g, self.total_carbs_g, self.total_fat_g)
    }
}

fn macro_progress(total: f64, goal: Option<f64>) -> Option<f64> {
    goal.filter(|goal| *goal > 0.0).map(|goal| total / goal)
}

/// Percentage split of macro calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein share (%)
    pub protein_percent: f64,
    /// Carbohydrate share (%)
    pub carbs_percent: f64,
    /// Fat share (%)
    pub fat_percent: f64,
}

impl MacroDistribution {
    /// Distribution with every share at zero
    pub const ZERO: Self = Self {
        protein_percent: 0.0,
        carbs_percent: 0.0,
        fat_percent: 0.0,
    };

    /// Convert macro grams to calorie shares using Atwater factors
    ///
    /// Returns [`Self::ZERO`] when the macros carry no calories.
    #[must_use]
    pub fn from_grams(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        let protein_kcal = protein_g * atwater::PROTEIN_KCAL_PER_G;
        let carbs_kcal = carbs_g * atwater::CARBS_KCAL_PER_G;
        let fat_kcal = fat_g * atwater::FAT_KCAL_PER_G;
        let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

        if total_kcal <= 0.0 {
            return Self::ZERO;
        }

        Self {
            protein_percent: protein_kcal / total_kcal * 100.0,
            carbs_percent: carbs_kcal / total_kcal * 100.0,
            fat_percent: fat_kcal / total_kcal * 100.0,
        }
    }

    /// Whether all three shares fall inside the default balanced ranges
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.is_balanced_with(&MacroBalanceConfig::default())
    }

    /// Whether all three shares fall inside the given ranges
    #[must_use]
    pub fn is_balanced_with(&self, ranges: &MacroBalanceConfig) -> bool {
        ranges.protein_percent.contains(&self.protein_percent)
            && ranges.carbs_percent.contains(&self.carbs_percent)
            && ranges.fat_percent.contains(&self.fat_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nutri_core::models::DrinkType;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default()
    }

    fn food(category: MealCategory, calories: i32) -> FoodRecord {
        let at = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).single().unwrap_or_default();
        FoodRecord::new(at, category, "Test food").with_calories(calories)
    }

    #[test]
    fn test_zero_goals_yield_zero_progress() {
        let goals = Goals::with_target_weight(70.0).with_daily_goals(0, 0.0);
        let at = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).single().unwrap_or_default();
        let summary = DailySummary::new(
            day(),
            vec![food(MealCategory::Breakfast, 400)],
            vec![DrinkRecord::new(at, DrinkType::Water, 500.0)],
            goals,
        );

        assert!(summary.calorie_progress().abs() < f64::EPSILON);
        assert!(summary.water_progress().abs() < f64::EPSILON);
        assert!(summary.is_over_calorie_goal());
        assert_eq!(summary.calories_remaining(), 0);
    }

    #[test]
    fn test_macro_progress_requires_positive_target() {
        let goals = Goals::with_target_weight(70.0).with_macro_targets(100.0, 0.0, 50.0);
        let mut record = food(MealCategory::Lunch, 500);
        record.protein_g = Some(50.0);
        record.fat_g = Some(25.0);
        let summary = DailySummary::new(day(), vec![record], Vec::new(), goals);

        assert_eq!(summary.protein_progress(), Some(0.5));
        assert_eq!(summary.carbs_progress(), None);
        assert_eq!(summary.fat_progress(), Some(0.5));
    }

    #[test]
    fn test_zero_macro_calories_gives_zero_distribution() {
        let distribution = MacroDistribution::from_grams(0.0, 0.0, 0.0);
        assert_eq!(distribution, MacroDistribution::ZERO);
        assert!(!distribution.is_balanced());
    }

    #[test]
    fn test_balanced_requires_all_three_ranges() {
        // 30% protein, 40% carbs, 30% fat
        let balanced = MacroDistribution {
            protein_percent: 30.0,
            carbs_percent: 40.0,
            fat_percent: 30.0,
        };
        assert!(balanced.is_balanced());

        // Protein and carbs in range, fat too high
        let fatty = MacroDistribution {
            protein_percent: 25.0,
            carbs_percent: 35.0,
            fat_percent: 40.0,
        };
        assert!(!fatty.is_balanced());
    }

    #[test]
    fn test_calories_by_meal_and_main_meals() {
        let summary = DailySummary::new(
            day(),
            vec![
                food(MealCategory::Breakfast, 300),
                food(MealCategory::Breakfast, 100),
                food(MealCategory::Lunch, 600),
                food(MealCategory::AfternoonSnack, 150),
            ],
            Vec::new(),
            Goals::with_target_weight(70.0),
        );

        let by_meal = summary.calories_by_meal();
        assert_eq!(by_meal.get(&MealCategory::Breakfast), Some(&400));
        assert_eq!(by_meal.get(&MealCategory::Lunch), Some(&600));
        assert_eq!(by_meal.get(&MealCategory::Dinner), None);
        assert!(!summary.has_logged_all_main_meals());
        assert_eq!(summary.entries_by_meal()[&MealCategory::Breakfast].len(), 2);
    }
}
