// ABOUTME: Gathers achievement inputs from the stores and persists unlock transitions
// ABOUTME: Recomputes every achievement type and upserts the resulting records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::summaries::{current_streak, weight_progress};
use crate::config::EngineConfig;
use crate::intelligence::{
    apply_transition, assess, summarize_range, AchievementContext, DailyGoalSignals,
};
use crate::store::{AchievementStore, GoalStore, RecordStore};
use chrono::{DateTime, Days, NaiveDate, Utc};
use futures_util::future::try_join;
use nutri_core::errors::AppResult;
use nutri_core::models::{sort_for_display, Achievement, AchievementType, Goals};
use tracing::{info, instrument};

/// Days in the rolling water-goal window, reference day included
const WATER_WINDOW_DAYS: u64 = 7;

/// Collect every metric the achievement table reads, as of `today`
///
/// # Errors
///
/// Returns an error if a count, weight or record fetch fails. The streak
/// degrades to zero instead of failing.
#[instrument(skip(records, goals, config))]
pub async fn build_context(
    records: &dyn RecordStore,
    goals: &Goals,
    today: NaiveDate,
    config: &EngineConfig,
) -> AppResult<AchievementContext> {
    let streak = current_streak(records, today, &config.streak).await;
    let (total_food_entries, total_logged_days) =
        try_join(records.food_record_count(), records.logged_day_count()).await?;

    let weight = weight_progress(records, goals.target_weight_kg, today, config).await?;
    let (weight_lost_kg, weight_goal_progress, weight_goal_reached) =
        weight.as_ref().map_or((0.0, 0.0, false), |progress| {
            (
                progress.total_lost_kg().max(0.0),
                progress.progress_percentage(),
                progress.goal_reached(),
            )
        });

    let window_start = today
        .checked_sub_days(Days::new(WATER_WINDOW_DAYS - 1))
        .unwrap_or(today);
    let (food, drinks) = try_join(
        records.food_records_between(window_start, today),
        records.drink_records_between(window_start, today),
    )
    .await?;
    let recent_days = summarize_range(window_start, today, food, drinks, goals);

    let water_goal_days = recent_days.iter().filter(|day| day.met_water_goal()).count();
    let goals_met_today = recent_days
        .last()
        .map(DailyGoalSignals::from_summary)
        .unwrap_or_default();

    Ok(AchievementContext {
        current_streak: streak,
        total_food_entries,
        total_logged_days,
        weight_lost_kg,
        weight_goal_progress,
        weight_goal_reached,
        goals_met_today,
        water_goal_days: u32::try_from(water_goal_days).unwrap_or(u32::MAX),
    })
}

/// Recompute every achievement and persist the transitions
///
/// Missing records are created locked before the transition applies. Returns
/// the stored records in display order.
///
/// # Errors
///
/// Returns an error if goals, metrics or achievement records cannot be read or written
#[instrument(skip_all, fields(%now))]
pub async fn refresh_achievements(
    records: &dyn RecordStore,
    goals: &dyn GoalStore,
    achievements: &dyn AchievementStore,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> AppResult<Vec<Achievement>> {
    let goals = goals.goals().await?;
    let context = build_context(records, &goals, now.date_naive(), config).await?;

    let mut refreshed = Vec::with_capacity(AchievementType::ALL.len());
    for achievement_type in AchievementType::ALL {
        let existing = achievements.achievement(achievement_type).await?;
        let was_unlocked = existing.as_ref().is_some_and(Achievement::is_unlocked);

        let assessment = assess(achievement_type, &context);
        let updated = apply_transition(achievement_type, existing, assessment, now);
        if updated.is_unlocked() && !was_unlocked {
            info!(achievement = achievement_type.key(), "Achievement unlocked");
        }
        refreshed.push(achievements.upsert_achievement(updated).await?);
    }

    sort_for_display(&mut refreshed);
    Ok(refreshed)
}
