// ABOUTME: User nutrition and weight goals consumed read-only by the analytics engine
// ABOUTME: Daily calorie and water targets, optional macro targets and target weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::default_goals;
use serde::{Deserialize, Serialize};

/// Snapshot of a user's goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    /// Daily calorie goal (kcal)
    pub daily_calorie_goal: i32,
    /// Daily water goal (ml of effective hydration)
    pub daily_water_goal_ml: f64,
    /// Daily protein target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protein_g: Option<f64>,
    /// Daily carbohydrate target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_carbs_g: Option<f64>,
    /// Daily fat target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_fat_g: Option<f64>,
    /// Target body weight (kg)
    pub target_weight_kg: f64,
}

impl Goals {
    /// Goals with default calorie and water targets and no macro targets
    #[must_use]
    pub const fn with_target_weight(target_weight_kg: f64) -> Self {
        Self {
            daily_calorie_goal: default_goals::CALORIES,
            daily_water_goal_ml: default_goals::WATER_ML,
            target_protein_g: None,
            target_carbs_g: None,
            target_fat_g: None,
            target_weight_kg,
        }
    }

    /// Set the daily calorie and water goals
    #[must_use]
    pub const fn with_daily_goals(mut self, calories: i32, water_ml: f64) -> Self {
        self.daily_calorie_goal = calories;
        self.daily_water_goal_ml = water_ml;
        self
    }

    /// Set protein, carbohydrate and fat targets
    #[must_use]
    pub const fn with_macro_targets(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.target_protein_g = Some(protein_g);
        self.target_carbs_g = Some(carbs_g);
        self.target_fat_g = Some(fat_g);
        self
    }
}
