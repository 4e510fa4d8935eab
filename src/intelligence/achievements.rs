// ABOUTME: Achievement progress mapping and the monotonic unlock transition
// ABOUTME: Maps each achievement type to a progress source and computes progress in [0, 1]
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Achievement progress engine
//!
//! Each [`AchievementType`] reads exactly one metric, described by its
//! [`ProgressSource`]. Progress is that metric divided by the type's target
//! value, clamped to [0, 1]. Unlocking is one-way: once `unlocked_at` is set it
//! is never cleared and progress stays at 1.0.

use super::aggregation::DailySummary;
use chrono::{DateTime, Utc};
use nutri_core::constants::daily_reference;
use nutri_core::models::{Achievement, AchievementType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metric an achievement type is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSource {
    /// Current consecutive logging days
    StreakDays,
    /// Kilograms lost since the start of the weight window
    WeightLostKg,
    /// Share of the planned weight loss achieved
    WeightGoalProgress,
    /// Whether the current weight is at or below target
    WeightGoalReached,
    /// Total food records ever logged
    FoodEntries,
    /// Whether today's water goal is met
    WaterGoalToday,
    /// Days in the last week meeting the water goal
    WaterGoalDays,
    /// No metric is tracked yet; progress stays at zero
    NotYetImplemented,
}

impl ProgressSource {
    /// Source table for every achievement type
    #[must_use]
    pub const fn for_type(achievement_type: AchievementType) -> Self {
        match achievement_type {
            AchievementType::Streak7Days
            | AchievementType::Streak30Days
            | AchievementType::Streak100Days => Self::StreakDays,
            AchievementType::FirstKilogram => Self::WeightLostKg,
            AchievementType::HalfwayThere => Self::WeightGoalProgress,
            AchievementType::GoalReached => Self::WeightGoalReached,
            AchievementType::FirstEntry
            | AchievementType::HundredEntries
            | AchievementType::ThousandEntries => Self::FoodEntries,
            AchievementType::HydrationHero => Self::WaterGoalToday,
            AchievementType::WaterWeek => Self::WaterGoalDays,
            AchievementType::BalancedDay
            | AchievementType::ProteinChampion
            | AchievementType::FiberFriend
            | AchievementType::VeggieVictor
            | AchievementType::EarlyBird
            | AchievementType::MealPlanner
            | AchievementType::WeekendWarrior => Self::NotYetImplemented,
        }
    }
}

/// Goals met on the reference day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoalSignals {
    /// Effective hydration reached the water goal
    pub hydration: bool,
    /// Protein reached its target (false without a target)
    pub protein: bool,
    /// Fiber reached the daily reference intake
    pub fiber: bool,
}

impl DailyGoalSignals {
    /// Derive the signals from a day's summary
    #[must_use]
    pub fn from_summary(summary: &DailySummary) -> Self {
        Self {
            hydration: summary.met_water_goal(),
            protein: summary.protein_progress().is_some_and(|p| p >= 1.0),
            fiber: summary.total_fiber_g >= daily_reference::FIBER_G,
        }
    }
}

/// Everything the progress table reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementContext {
    /// Current logging streak (days)
    pub current_streak: u32,
    /// Food records ever logged
    pub total_food_entries: u64,
    /// Distinct days with food records
    pub total_logged_days: u64,
    /// Kilograms lost in the weight window, never negative
    pub weight_lost_kg: f64,
    /// Share of the planned weight loss achieved, in [0, 1]
    pub weight_goal_progress: f64,
    /// Whether the current weight is at or below target
    pub weight_goal_reached: bool,
    /// Goals met on the reference day
    pub goals_met_today: DailyGoalSignals,
    /// Days in the last seven meeting the water goal
    pub water_goal_days: u32,
}

impl AchievementContext {
    /// Raw metric value for a source, in the unit of the matching target value
    #[must_use]
    pub fn metric(&self, source: ProgressSource) -> f64 {
        match source {
            ProgressSource::StreakDays => f64::from(self.current_streak),
            ProgressSource::WeightLostKg => self.weight_lost_kg.max(0.0),
            ProgressSource::WeightGoalProgress => self.weight_goal_progress,
            ProgressSource::WeightGoalReached => flag(self.weight_goal_reached),
            ProgressSource::FoodEntries => self.total_food_entries as f64,
            ProgressSource::WaterGoalToday => flag(self.goals_met_today.hydration),
            ProgressSource::WaterGoalDays => f64::from(self.water_goal_days),
            ProgressSource::NotYetImplemented => 0.0,
        }
    }
}

const fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Freshly computed progress for one type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressAssessment {
    /// Progress in [0, 1]
    pub progress: f64,
    /// Progress reached 1.0
    pub should_unlock: bool,
}

/// Compute progress for one achievement type
#[must_use]
pub fn assess(achievement_type: AchievementType, context: &AchievementContext) -> ProgressAssessment {
    let source = ProgressSource::for_type(achievement_type);
    let target = achievement_type.target_value();
    let metric = context.metric(source);
    let progress = if target > 0.0 && metric.is_finite() {
        (metric / target).clamp(0.0, 1.0)
    } else {
        0.0
    };

    debug!(
        achievement = achievement_type.key(),
        ?source,
        metric,
        target,
        progress,
        "Assessed achievement progress"
    );

    ProgressAssessment {
        progress,
        should_unlock: progress >= 1.0,
    }
}

/// Apply a fresh assessment to the stored record
///
/// A missing record starts locked at zero progress. An unlocked record is
/// returned unchanged with progress pinned at 1.0. Otherwise progress is
/// overwritten (it may go down) and the record unlocks at `now` when the
/// assessment qualifies.
#[must_use]
pub fn apply_transition(
    achievement_type: AchievementType,
    existing: Option<Achievement>,
    assessment: ProgressAssessment,
    now: DateTime<Utc>,
) -> Achievement {
    let mut achievement = existing.unwrap_or_else(|| Achievement::locked(achievement_type));

    if achievement.is_unlocked() {
        achievement.progress = 1.0;
        return achievement;
    }

    if assessment.should_unlock {
        achievement.progress = 1.0;
        achievement.unlocked_at = Some(now);
        debug!(achievement = achievement_type.key(), %now, "Achievement unlocked");
    } else {
        achievement.progress = assessment.progress.clamp(0.0, 1.0);
    }
    achievement
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use nutri_core::models::AchievementState;

    #[test]
    fn test_streak_progress_is_fraction_of_target() {
        let context = AchievementContext {
            current_streak: 3,
            ..AchievementContext::default()
        };
        let week = assess(AchievementType::Streak7Days, &context);
        assert!((week.progress - 3.0 / 7.0).abs() < 1e-12);
        assert!(!week.should_unlock);

        let month = assess(AchievementType::Streak30Days, &context);
        assert!((month.progress - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_progress_capped_at_one() {
        let context = AchievementContext {
            current_streak: 40,
            weight_lost_kg: 4.0,
            ..AchievementContext::default()
        };
        assert!((assess(AchievementType::Streak30Days, &context).progress - 1.0).abs() < f64::EPSILON);
        assert!(assess(AchievementType::FirstKilogram, &context).should_unlock);
    }

    #[test]
    fn test_halfway_uses_half_of_goal() {
        let context = AchievementContext {
            weight_goal_progress: 0.25,
            ..AchievementContext::default()
        };
        assert!((assess(AchievementType::HalfwayThere, &context).progress - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_placeholder_types_stay_at_zero() {
        let context = AchievementContext {
            current_streak: 100,
            total_food_entries: 5000,
            total_logged_days: 365,
            goals_met_today: DailyGoalSignals {
                hydration: true,
                protein: true,
                fiber: true,
            },
            water_goal_days: 7,
            ..AchievementContext::default()
        };
        for kind in AchievementType::ALL {
            if ProgressSource::for_type(kind) == ProgressSource::NotYetImplemented {
                assert!(assess(kind, &context).progress.abs() < f64::EPSILON, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_missing_record_starts_locked() {
        let assessment = assess(AchievementType::WaterWeek, &AchievementContext::default());
        let achievement = apply_transition(AchievementType::WaterWeek, None, assessment, Utc::now());
        assert_eq!(achievement.state(), AchievementState::Locked);
        assert_eq!(achievement.unlocked_at, None);
    }

    #[test]
    fn test_in_progress_can_move_down() {
        let mut stored = Achievement::locked(AchievementType::Streak7Days);
        stored.progress = 5.0 / 7.0;

        let assessment = ProgressAssessment {
            progress: 1.0 / 7.0,
            should_unlock: false,
        };
        let updated =
            apply_transition(AchievementType::Streak7Days, Some(stored), assessment, Utc::now());
        assert!((updated.progress - 1.0 / 7.0).abs() < 1e-12);
        assert!(!updated.is_unlocked());
    }

    #[test]
    fn test_unlock_timestamp_never_moves() {
        let first = Utc::now();
        let unlocked = apply_transition(
            AchievementType::FirstKilogram,
            None,
            ProgressAssessment {
                progress: 1.0,
                should_unlock: true,
            },
            first,
        );
        assert_eq!(unlocked.unlocked_at, Some(first));

        let later = apply_transition(
            AchievementType::FirstKilogram,
            Some(unlocked),
            ProgressAssessment {
                progress: 1.0,
                should_unlock: true,
            },
            first + Duration::days(3),
        );
        assert_eq!(later.unlocked_at, Some(first));
        assert!((later.progress - 1.0).abs() < f64::EPSILON);
    }
}
