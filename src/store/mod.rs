// ABOUTME: Collaborator interfaces for record, goal and achievement storage
// ABOUTME: Async traits the orchestration services read from and write achievements to
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Storage abstraction
//!
//! The engine never owns persistence. Services depend on these traits so any
//! backend (database, mobile store, remote API) can feed them; [`memory`]
//! provides an in-process implementation.

/// In-memory implementation of every store trait
pub mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use nutri_core::errors::AppResult;
use nutri_core::models::{Achievement, AchievementType, DrinkRecord, FoodRecord, Goals, WeightRecord};

/// Read access to logged records
///
/// Date ranges are inclusive on both ends and refer to the UTC calendar day of
/// each record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Food records logged on `date`
    async fn food_records_on(&self, date: NaiveDate) -> AppResult<Vec<FoodRecord>>;

    /// Food records logged from `start` through `end`
    async fn food_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<FoodRecord>>;

    /// Drink records logged on `date`
    async fn drink_records_on(&self, date: NaiveDate) -> AppResult<Vec<DrinkRecord>>;

    /// Drink records logged from `start` through `end`
    async fn drink_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DrinkRecord>>;

    /// Weight records measured from `start` through `end`, oldest first
    async fn weight_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<WeightRecord>>;

    /// Number of food records ever logged
    async fn food_record_count(&self) -> AppResult<u64>;

    /// Number of distinct days with at least one food record
    async fn logged_day_count(&self) -> AppResult<u64>;
}

/// Read access to the user's goals
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Current goals
    async fn goals(&self) -> AppResult<Goals>;
}

/// Persisted achievement records, at most one per type
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Stored record for a type, if any
    async fn achievement(&self, achievement_type: AchievementType) -> AppResult<Option<Achievement>>;

    /// Every stored record
    async fn all_achievements(&self) -> AppResult<Vec<Achievement>>;

    /// Create or replace the record for `achievement.achievement_type`
    ///
    /// Returns the stored record. Replacing keeps the existing record id.
    async fn upsert_achievement(&self, achievement: Achievement) -> AppResult<Achievement>;
}
