// ABOUTME: Main library entry point for the NutriBalance analytics engine
// ABOUTME: Summaries, weight trends, streaks and achievements over logged nutrition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriBalance
//!
//! Analytics and progression engine for a personal nutrition tracker.
//! Given logged food, drink and weight records plus the user's goals it
//! derives daily and weekly summaries, weight progress, logging streaks and
//! achievement state.
//!
//! ## Architecture
//!
//! - **Models** (`nutri_core::models`): record, goal and achievement types
//! - **Intelligence**: pure computations over already-fetched records
//! - **Store**: async collaborator traits plus an in-memory backend
//! - **Services**: fetch-then-compute orchestration and achievement persistence
//! - **Config**: engine thresholds with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use nutri_balance::config::EngineConfig;
//! use nutri_balance::services::{daily_summary, refresh_achievements};
//! use nutri_balance::store::InMemoryStore;
//! use nutri_core::errors::AppResult;
//! use nutri_core::models::{FoodRecord, Goals, MealCategory};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemoryStore::new(Goals::with_target_weight(70.0));
//!     store
//!         .add_food_record(
//!             FoodRecord::new(Utc::now(), MealCategory::Breakfast, "Oatmeal").with_calories(150),
//!         )
//!         .await;
//!
//!     let goals = Goals::with_target_weight(70.0);
//!     let today = daily_summary(&store, &goals, Utc::now().date_naive()).await?;
//!     println!("{} kcal remaining", today.calories_remaining());
//!
//!     let config = EngineConfig::global();
//!     let achievements = refresh_achievements(&store, &store, &store, Utc::now(), config).await?;
//!     println!("{} achievements tracked", achievements.len());
//!     Ok(())
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Pure analytics computations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Fetch-then-compute orchestration services
pub mod services;

/// Storage collaborator traits and the in-memory backend
pub mod store;

pub use nutri_core::{constants, errors, models};
