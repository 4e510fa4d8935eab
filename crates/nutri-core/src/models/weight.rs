// ABOUTME: Body weight and composition measurement model
// ABOUTME: WeightRecord with optional body fat, muscle mass and circumferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Record identifier
    pub id: Uuid,
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
    /// Waist circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

impl WeightRecord {
    /// Create a weight-only measurement
    #[must_use]
    pub fn new(date: DateTime<Utc>, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            weight_kg,
            body_fat_percentage: None,
            muscle_mass_kg: None,
            waist_cm: None,
            hip_cm: None,
        }
    }

    /// Set waist and hip circumference
    #[must_use]
    pub const fn with_circumferences(mut self, waist_cm: f64, hip_cm: f64) -> Self {
        self.waist_cm = Some(waist_cm);
        self.hip_cm = Some(hip_cm);
        self
    }

    /// Calendar day (UTC) of the measurement
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Waist-to-hip ratio when both circumferences are present and hip is positive
    #[must_use]
    pub fn waist_to_hip_ratio(&self) -> Option<f64> {
        match (self.waist_cm, self.hip_cm) {
            (Some(waist), Some(hip)) if hip > 0.0 => Some(waist / hip),
            _ => None,
        }
    }
}
