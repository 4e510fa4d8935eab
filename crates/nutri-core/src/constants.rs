// ABOUTME: Nutrition, hydration and progression constants used across the analytics engine
// ABOUTME: Atwater energy factors, drink hydration factors, balance ranges and achievement targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain constants
//!
//! Values that are part of the domain rather than tunable policy. Tunable
//! thresholds (trend noise band, streak safety bound, weight window) live in the
//! engine configuration and only take their defaults from here.

/// Energy density of macronutrients (kcal per gram)
///
/// Reference: Atwater general factor system (USDA Agriculture Handbook No. 74)
pub mod atwater {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Fraction of a drink's volume that counts toward the water goal
pub mod hydration {
    /// Water
    pub const WATER: f64 = 1.0;
    /// Tea
    pub const TEA: f64 = 0.9;
    /// Milk
    pub const MILK: f64 = 0.9;
    /// Juice
    pub const JUICE: f64 = 0.85;
    /// Smoothie
    pub const SMOOTHIE: f64 = 0.85;
    /// Coffee (slight diuretic effect)
    pub const COFFEE: f64 = 0.8;
    /// Soft drinks
    pub const SODA: f64 = 0.5;
    /// Unclassified drinks
    pub const OTHER: f64 = 0.5;
    /// Alcohol is dehydrating and contributes nothing
    pub const ALCOHOLIC: f64 = 0.0;
}

/// Macro percentage ranges for a balanced day (inclusive, percent of macro calories)
pub mod macro_balance {
    /// Protein lower bound
    pub const PROTEIN_MIN_PERCENT: f64 = 20.0;
    /// Protein upper bound
    pub const PROTEIN_MAX_PERCENT: f64 = 40.0;
    /// Carbohydrate lower bound
    pub const CARBS_MIN_PERCENT: f64 = 30.0;
    /// Carbohydrate upper bound
    pub const CARBS_MAX_PERCENT: f64 = 50.0;
    /// Fat lower bound
    pub const FAT_MIN_PERCENT: f64 = 20.0;
    /// Fat upper bound
    pub const FAT_MAX_PERCENT: f64 = 35.0;
}

/// Weight trend defaults
pub mod weight_trend {
    /// Average difference (kg) below which recent weights count as stable.
    /// Open to recalibration; exposed through the engine config.
    pub const NOISE_BAND_KG: f64 = 0.3;
    /// Minimum number of records before a trend is classified
    pub const MIN_RECORDS: usize = 3;
    /// Most recent records considered by the trend
    pub const SAMPLE_SIZE: usize = 5;
    /// How many of the sampled records form the "recent" average
    pub const RECENT_COUNT: usize = 2;
    /// Default history window handed to the trend calculator
    pub const WINDOW_DAYS: u32 = 90;
    /// Days per week used for rate conversions
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Streak walk defaults
pub mod streak {
    /// Safety bound on the backward day walk
    pub const MAX_DAYS: u32 = 365;
}

/// Default goals used when a user has not configured their own
pub mod default_goals {
    /// Daily calorie goal (kcal)
    pub const CALORIES: i32 = 2000;
    /// Daily water goal (ml)
    pub const WATER_ML: f64 = 2000.0;
}

/// Daily intake references without a user-configurable goal
pub mod daily_reference {
    /// Fiber (g/day)
    ///
    /// Reference: FDA Daily Value for dietary fiber on a 2000 kcal diet (21 CFR 101.9, pre-2016 label)
    pub const FIBER_G: f64 = 25.0;
}

/// Body composition and energy expenditure references
pub mod body_metrics {
    /// BMI below this is underweight
    pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
    /// BMI below this (and at least the underweight bound) is normal
    pub const BMI_OVERWEIGHT_FROM: f64 = 25.0;
    /// BMI at or above this is obese
    pub const BMI_OBESE_FROM: f64 = 30.0;

    /// Mifflin-St Jeor: kcal per kg of body weight
    ///
    /// Reference: Mifflin MD, St Jeor ST, et al. (1990) Am J Clin Nutr 51(2):241-247
    pub const MIFFLIN_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor: kcal per cm of height
    pub const MIFFLIN_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor: kcal per year of age
    pub const MIFFLIN_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor constant (male form)
    pub const MIFFLIN_MALE_CONSTANT: f64 = 5.0;

    /// Activity multipliers applied to BMR
    pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE_MULTIPLIER: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE_MULTIPLIER: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.725;
    /// Very hard exercise or a physical job
    pub const EXTRA_ACTIVE_MULTIPLIER: f64 = 1.9;
}

/// Nutrient density reference quantity
pub mod nutrient_density {
    /// Food item nutrients are stated per this many grams or milliliters
    pub const REFERENCE_QUANTITY: f64 = 100.0;
}
