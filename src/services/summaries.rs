// ABOUTME: Fetch-then-compute orchestration for daily, weekly and monthly summaries
// ABOUTME: Also drives weight progress and the store-backed logging streak
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::{EngineConfig, StreakConfig};
use crate::intelligence::{
    iso_week_bounds, month_bounds, summarize_range, DailySummary, StreakCalculator,
    WeeklySummary, WeightProgress,
};
use crate::store::RecordStore;
use chrono::{Days, NaiveDate};
use futures_util::future::{try_join, try_join_all};
use nutri_core::errors::AppResult;
use nutri_core::models::{FoodRecord, Goals};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Summary of one day
///
/// # Errors
///
/// Returns an error if either record fetch fails
#[instrument(skip(store, goals))]
pub async fn daily_summary(
    store: &dyn RecordStore,
    goals: &Goals,
    date: NaiveDate,
) -> AppResult<DailySummary> {
    let (food, drinks) = try_join(store.food_records_on(date), store.drink_records_on(date)).await?;
    Ok(DailySummary::new(date, food, drinks, goals.clone()))
}

/// Summary of the ISO week (Monday through Sunday) containing `date`
///
/// The seven per-day fetches run concurrently and are fanned in by date.
///
/// # Errors
///
/// Returns an error if any per-day fetch fails
#[instrument(skip(store, goals))]
pub async fn weekly_summary(
    store: &dyn RecordStore,
    goals: &Goals,
    date: NaiveDate,
) -> AppResult<WeeklySummary> {
    let (start, end) = iso_week_bounds(date);
    let days = start.iter_days().take_while(|day| *day <= end);
    let summaries = try_join_all(days.map(|day| daily_summary(store, goals, day))).await?;

    let week = WeeklySummary::new(start, end, summaries);
    debug!(
        %start,
        %end,
        average_calories = week.average_calories(),
        logging_streak = week.logging_streak(),
        "Built weekly summary"
    );
    Ok(week)
}

/// One summary per calendar day of the month containing `date`
///
/// Uses a single range fetch per record kind and buckets records by day.
///
/// # Errors
///
/// Returns an error if either range fetch fails
#[instrument(skip(store, goals))]
pub async fn monthly_summaries(
    store: &dyn RecordStore,
    goals: &Goals,
    date: NaiveDate,
) -> AppResult<Vec<DailySummary>> {
    let (start, end) = month_bounds(date);
    let (food, drinks) = try_join(
        store.food_records_between(start, end),
        store.drink_records_between(start, end),
    )
    .await?;
    Ok(summarize_range(start, end, food, drinks, goals))
}

/// Progress toward `target_weight_kg` over the weight window ending at `reference`
///
/// The window covers `reference` and the `window_days` days before it. `None`
/// when no weight was recorded in it.
///
/// # Errors
///
/// Returns an error if the weight fetch fails
#[instrument(skip(store, config))]
pub async fn weight_progress(
    store: &dyn RecordStore,
    target_weight_kg: f64,
    reference: NaiveDate,
    config: &EngineConfig,
) -> AppResult<Option<WeightProgress>> {
    let lookback = Days::new(u64::from(config.weight.window_days));
    let start = reference.checked_sub_days(lookback).unwrap_or(NaiveDate::MIN);
    let records = store.weight_records_between(start, reference).await?;
    Ok(WeightProgress::from_records(
        target_weight_kg,
        records,
        &config.trend,
    ))
}

/// Consecutive days with food records ending at `reference`
///
/// Fetches the whole bounded window once, then walks it. A failed fetch is
/// logged and yields a streak of zero.
#[instrument(skip(store, config))]
pub async fn current_streak(
    store: &dyn RecordStore,
    reference: NaiveDate,
    config: &StreakConfig,
) -> u32 {
    let lookback = Days::new(u64::from(config.max_days.saturating_sub(1)));
    let start = reference.checked_sub_days(lookback).unwrap_or(NaiveDate::MIN);

    let logged_days = store
        .food_records_between(start, reference)
        .await
        .map(|records| records.iter().map(FoodRecord::day).collect::<HashSet<_>>());

    StreakCalculator::from_config(config).count(reference, |day| {
        logged_days.as_ref().map(|days| days.contains(&day))
    })
}
