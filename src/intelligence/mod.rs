// ABOUTME: Analytics and progression engine over logged food, drink and weight records
// ABOUTME: Pure computations for summaries, weight trends, streaks and achievement progress
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Analytics & Progression Engine
//!
//! Every function in this module works on already-fetched records. Nothing here
//! performs I/O, holds state or fails: missing values count as zero, zero
//! denominators produce defined fallbacks and short histories produce neutral
//! results. Fetching and fan-out belong to [`crate::services`].

/// Achievement progress table and unlock transition
pub mod achievements;
/// Daily aggregation and macro distribution
pub mod aggregation;
/// Backward day-walk for logging streaks
pub mod streak;
/// Weekly and monthly rollups
pub mod weekly;
/// Weight progress and trend classification
pub mod weight_trend;

pub use achievements::{
    apply_transition, assess, AchievementContext, DailyGoalSignals, ProgressAssessment,
    ProgressSource,
};
pub use aggregation::{DailySummary, MacroDistribution};
pub use streak::StreakCalculator;
pub use weekly::{days_between, iso_week_bounds, month_bounds, summarize_range, WeeklySummary};
pub use weight_trend::{WeightProgress, WeightTrend};
