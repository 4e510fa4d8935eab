// ABOUTME: In-memory record, goal and achievement store behind an async read-write lock
// ABOUTME: Used by tests, benchmarks and callers embedding the engine without a database
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{AchievementStore, GoalStore, RecordStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use nutri_core::errors::{AppError, AppResult};
use nutri_core::models::{Achievement, AchievementType, DrinkRecord, FoodRecord, Goals, WeightRecord};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug)]
struct StoreState {
    food: Vec<FoodRecord>,
    drinks: Vec<DrinkRecord>,
    weights: Vec<WeightRecord>,
    goals: Goals,
    achievements: HashMap<AchievementType, Achievement>,
}

/// Shared in-memory store
///
/// Clones share the same state. Reads can be made to fail with
/// [`set_unavailable`](Self::set_unavailable) to exercise degraded paths.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Empty store with the given goals
    #[must_use]
    pub fn new(goals: Goals) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                food: Vec::new(),
                drinks: Vec::new(),
                weights: Vec::new(),
                goals,
                achievements: HashMap::new(),
            })),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every record read fail with a storage error until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::storage("in-memory store marked unavailable"));
        }
        Ok(())
    }

    /// Log a food record
    pub async fn add_food_record(&self, record: FoodRecord) -> Uuid {
        let id = record.id;
        self.state.write().await.food.push(record);
        id
    }

    /// Log a drink record
    pub async fn add_drink_record(&self, record: DrinkRecord) -> Uuid {
        let id = record.id;
        self.state.write().await.drinks.push(record);
        id
    }

    /// Log a weight record
    pub async fn add_weight_record(&self, record: WeightRecord) -> Uuid {
        let id = record.id;
        self.state.write().await.weights.push(record);
        id
    }

    /// Delete a food record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no food record has this id
    pub async fn remove_food_record(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        let before = state.food.len();
        state.food.retain(|record| record.id != id);
        if state.food.len() == before {
            return Err(AppError::not_found(format!("food record {id}")));
        }
        Ok(())
    }

    /// Replace the goals
    pub async fn set_goals(&self, goals: Goals) {
        self.state.write().await.goals = goals;
    }
}

fn in_range(day: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    day >= start && day <= end
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn food_records_on(&self, date: NaiveDate) -> AppResult<Vec<FoodRecord>> {
        self.food_records_between(date, date).await
    }

    async fn food_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<FoodRecord>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .food
            .iter()
            .filter(|record| in_range(record.day(), start, end))
            .cloned()
            .collect())
    }

    async fn drink_records_on(&self, date: NaiveDate) -> AppResult<Vec<DrinkRecord>> {
        self.drink_records_between(date, date).await
    }

    async fn drink_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DrinkRecord>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .drinks
            .iter()
            .filter(|record| in_range(record.day(), start, end))
            .cloned()
            .collect())
    }

    async fn weight_records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<WeightRecord>> {
        self.check_available()?;
        let state = self.state.read().await;
        let mut records: Vec<WeightRecord> = state
            .weights
            .iter()
            .filter(|record| in_range(record.day(), start, end))
            .cloned()
            .collect();
        records.sort_by_key(|record| record.date);
        debug!(%start, %end, count = records.len(), "Fetched weight records");
        Ok(records)
    }

    async fn food_record_count(&self) -> AppResult<u64> {
        self.check_available()?;
        Ok(self.state.read().await.food.len() as u64)
    }

    async fn logged_day_count(&self) -> AppResult<u64> {
        self.check_available()?;
        let state = self.state.read().await;
        let days: BTreeSet<NaiveDate> = state.food.iter().map(FoodRecord::day).collect();
        Ok(days.len() as u64)
    }
}

#[async_trait]
impl GoalStore for InMemoryStore {
    async fn goals(&self) -> AppResult<Goals> {
        self.check_available()?;
        Ok(self.state.read().await.goals.clone())
    }
}

#[async_trait]
impl AchievementStore for InMemoryStore {
    async fn achievement(&self, achievement_type: AchievementType) -> AppResult<Option<Achievement>> {
        Ok(self
            .state
            .read()
            .await
            .achievements
            .get(&achievement_type)
            .cloned())
    }

    async fn all_achievements(&self) -> AppResult<Vec<Achievement>> {
        let state = self.state.read().await;
        let mut achievements: Vec<Achievement> = state.achievements.values().cloned().collect();
        achievements.sort_by_key(|achievement| achievement.achievement_type);
        Ok(achievements)
    }

    async fn upsert_achievement(&self, mut achievement: Achievement) -> AppResult<Achievement> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.achievements.get(&achievement.achievement_type) {
            achievement.id = existing.id;
        }
        state
            .achievements
            .insert(achievement.achievement_type, achievement.clone());
        Ok(achievement)
    }
}
