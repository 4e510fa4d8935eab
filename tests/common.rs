// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus record builders anchored to fixed dates
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutri_balance`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use nutri_balance::store::InMemoryStore;
use nutri_core::models::{DrinkRecord, DrinkType, FoodRecord, Goals, MealCategory, WeightRecord};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Noon UTC on the given day
pub fn noon(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
}

/// Goals used across tests: 2000 kcal, 2000 ml water, 70 kg target
pub fn default_goals() -> Goals {
    Goals::with_target_weight(70.0)
}

pub fn food(day: NaiveDate, category: MealCategory, name: &str, calories: i32) -> FoodRecord {
    FoodRecord::new(noon(day), category, name).with_calories(calories)
}

pub fn drink(day: NaiveDate, drink_type: DrinkType, amount_ml: f64) -> DrinkRecord {
    DrinkRecord::new(noon(day), drink_type, amount_ml)
}

/// Weight record `days_ago` days before now
pub fn weight_days_ago(days_ago: i64, weight_kg: f64) -> WeightRecord {
    WeightRecord::new(Utc::now() - Duration::days(days_ago), weight_kg)
}

/// Store seeded with [`default_goals`] and logging initialized
pub fn create_test_store() -> InMemoryStore {
    init_test_logging();
    InMemoryStore::new(default_goals())
}
