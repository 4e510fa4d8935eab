// ABOUTME: User body profile for BMI classification and energy expenditure estimates
// ABOUTME: UserProfile, ActivityLevel and BmiCategory with Mifflin-St Jeor TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{body_metrics, default_goals};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Factor applied to BMR to estimate daily expenditure
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => body_metrics::SEDENTARY_MULTIPLIER,
            Self::LightlyActive => body_metrics::LIGHTLY_ACTIVE_MULTIPLIER,
            Self::ModeratelyActive => body_metrics::MODERATELY_ACTIVE_MULTIPLIER,
            Self::VeryActive => body_metrics::VERY_ACTIVE_MULTIPLIER,
            Self::ExtraActive => body_metrics::EXTRA_ACTIVE_MULTIPLIER,
        }
    }
}

/// WHO adult BMI bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value; lower bounds are inclusive
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < body_metrics::BMI_UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < body_metrics::BMI_OVERWEIGHT_FROM {
            Self::Normal
        } else if bmi < body_metrics::BMI_OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Body measurements and activity used for BMI and expenditure estimates
///
/// Height and birth date are optional; estimates that need them are `None` or
/// fall back to the calorie goal when they are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Current weight (kg)
    pub current_weight_kg: f64,
    /// Target weight (kg)
    pub target_weight_kg: f64,
    /// Height (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Daily calorie goal (kcal)
    pub daily_calorie_goal: i32,
}

fn positive(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(field, value))
    }
}

impl UserProfile {
    /// Create a profile with the default activity level and calorie goal
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless both weights are finite and positive.
    pub fn new(current_weight_kg: f64, target_weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            current_weight_kg: positive("current_weight_kg", current_weight_kg)?,
            target_weight_kg: positive("target_weight_kg", target_weight_kg)?,
            height_cm: None,
            birth_date: None,
            activity_level: ActivityLevel::default(),
            daily_calorie_goal: default_goals::CALORIES,
        })
    }

    /// Set height
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless the height is finite and positive.
    pub fn with_height_cm(mut self, height_cm: f64) -> AppResult<Self> {
        self.height_cm = Some(positive("height_cm", height_cm)?);
        Ok(self)
    }

    /// Set date of birth
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set activity level
    #[must_use]
    pub const fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the daily calorie goal
    #[must_use]
    pub const fn with_daily_calorie_goal(mut self, calories: i32) -> Self {
        self.daily_calorie_goal = calories;
        self
    }

    /// Body mass index, `None` without a height
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm? / 100.0;
        Some(self.current_weight_kg / (height_m * height_m))
    }

    /// BMI band, `None` without a height
    #[must_use]
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    /// Completed years of age on `reference`
    ///
    /// `None` without a birth date or when `reference` is before it.
    #[must_use]
    pub fn age_on(&self, reference: NaiveDate) -> Option<u32> {
        reference.years_since(self.birth_date?)
    }

    /// Estimated total daily energy expenditure (kcal), truncated
    ///
    /// Mifflin-St Jeor BMR (male constant) times the activity multiplier.
    /// Falls back to the daily calorie goal when height or age is unknown.
    #[must_use]
    pub fn estimated_tdee(&self, reference: NaiveDate) -> i32 {
        let (Some(height_cm), Some(age)) = (self.height_cm, self.age_on(reference)) else {
            return self.daily_calorie_goal;
        };

        let weight_component = body_metrics::MIFFLIN_WEIGHT_COEF * self.current_weight_kg;
        let height_component = body_metrics::MIFFLIN_HEIGHT_COEF * height_cm;
        let age_component = body_metrics::MIFFLIN_AGE_COEF * f64::from(age);
        let bmr =
            weight_component + height_component + age_component + body_metrics::MIFFLIN_MALE_CONSTANT;
        (bmr * self.activity_level.multiplier()) as i32
    }
}
