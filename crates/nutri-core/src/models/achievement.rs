// ABOUTME: Gamified achievement model with type, category and target lookup tables
// ABOUTME: Achievement records track progress in [0, 1] and a monotonic unlock timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Group an achievement belongs to
///
/// Declaration order is the display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    /// Consecutive logging days
    Streaks,
    /// Progress toward the target weight
    WeightLoss,
    /// Number of food entries logged
    Logging,
    /// Water intake
    Hydration,
    /// Macro and food quality
    Nutrition,
    /// Habit regularity
    Consistency,
}

/// Every achievement that can be earned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementType {
    /// Log food 7 days in a row
    #[serde(rename = "streak_7_days")]
    Streak7Days,
    /// Log food 30 days in a row
    #[serde(rename = "streak_30_days")]
    Streak30Days,
    /// Log food 100 days in a row
    #[serde(rename = "streak_100_days")]
    Streak100Days,
    /// Lose the first kilogram
    #[serde(rename = "first_kilogram")]
    FirstKilogram,
    /// Reach half of the weight goal
    #[serde(rename = "halfway_there")]
    HalfwayThere,
    /// Reach the target weight
    #[serde(rename = "goal_reached")]
    GoalReached,
    /// Log the first food entry
    #[serde(rename = "first_entry")]
    FirstEntry,
    /// Log 100 food entries
    #[serde(rename = "hundred_entries")]
    HundredEntries,
    /// Log 1000 food entries
    #[serde(rename = "thousand_entries")]
    ThousandEntries,
    /// Meet the water goal for a day
    #[serde(rename = "hydration_hero")]
    HydrationHero,
    /// Meet the water goal 7 days
    #[serde(rename = "water_week")]
    WaterWeek,
    /// A day with balanced macros
    #[serde(rename = "balanced_day")]
    BalancedDay,
    /// Meet the protein target 7 days
    #[serde(rename = "protein_champion")]
    ProteinChampion,
    /// Meet the fiber target 5 days
    #[serde(rename = "fiber_friend")]
    FiberFriend,
    /// Eat vegetables 7 days
    #[serde(rename = "veggie_victor")]
    VeggieVictor,
    /// Log breakfast before 8am 7 days
    #[serde(rename = "early_bird")]
    EarlyBird,
    /// Log all main meals 7 days
    #[serde(rename = "meal_planner")]
    MealPlanner,
    /// Log food on 4 weekends
    #[serde(rename = "weekend_warrior")]
    WeekendWarrior,
}

impl AchievementType {
    /// Every achievement type, grouped by category
    pub const ALL: [Self; 18] = [
        Self::Streak7Days,
        Self::Streak30Days,
        Self::Streak100Days,
        Self::FirstKilogram,
        Self::HalfwayThere,
        Self::GoalReached,
        Self::FirstEntry,
        Self::HundredEntries,
        Self::ThousandEntries,
        Self::HydrationHero,
        Self::WaterWeek,
        Self::BalancedDay,
        Self::ProteinChampion,
        Self::FiberFriend,
        Self::VeggieVictor,
        Self::EarlyBird,
        Self::MealPlanner,
        Self::WeekendWarrior,
    ];

    /// Stable storage key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Streak7Days => "streak_7_days",
            Self::Streak30Days => "streak_30_days",
            Self::Streak100Days => "streak_100_days",
            Self::FirstKilogram => "first_kilogram",
            Self::HalfwayThere => "halfway_there",
            Self::GoalReached => "goal_reached",
            Self::FirstEntry => "first_entry",
            Self::HundredEntries => "hundred_entries",
            Self::ThousandEntries => "thousand_entries",
            Self::HydrationHero => "hydration_hero",
            Self::WaterWeek => "water_week",
            Self::BalancedDay => "balanced_day",
            Self::ProteinChampion => "protein_champion",
            Self::FiberFriend => "fiber_friend",
            Self::VeggieVictor => "veggie_victor",
            Self::EarlyBird => "early_bird",
            Self::MealPlanner => "meal_planner",
            Self::WeekendWarrior => "weekend_warrior",
        }
    }

    /// Look up a type by its storage key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Category this achievement is shown under
    #[must_use]
    pub const fn category(self) -> AchievementCategory {
        match self {
            Self::Streak7Days | Self::Streak30Days | Self::Streak100Days => {
                AchievementCategory::Streaks
            }
            Self::FirstKilogram | Self::HalfwayThere | Self::GoalReached => {
                AchievementCategory::WeightLoss
            }
            Self::FirstEntry | Self::HundredEntries | Self::ThousandEntries => {
                AchievementCategory::Logging
            }
            Self::HydrationHero | Self::WaterWeek => AchievementCategory::Hydration,
            Self::BalancedDay | Self::ProteinChampion | Self::FiberFriend | Self::VeggieVictor => {
                AchievementCategory::Nutrition
            }
            Self::EarlyBird | Self::MealPlanner | Self::WeekendWarrior => {
                AchievementCategory::Consistency
            }
        }
    }

    /// Target the underlying metric must reach for the achievement to unlock
    ///
    /// Units depend on the type: days, kilograms, entries, or a goal-progress
    /// fraction for `HalfwayThere` (0.5) and `GoalReached` (1.0).
    #[must_use]
    pub const fn target_value(self) -> f64 {
        match self {
            Self::Streak7Days
            | Self::WaterWeek
            | Self::ProteinChampion
            | Self::VeggieVictor
            | Self::EarlyBird
            | Self::MealPlanner => 7.0,
            Self::Streak30Days => 30.0,
            Self::Streak100Days | Self::HundredEntries => 100.0,
            Self::FirstKilogram
            | Self::GoalReached
            | Self::FirstEntry
            | Self::HydrationHero
            | Self::BalancedDay => 1.0,
            Self::HalfwayThere => 0.5,
            Self::ThousandEntries => 1000.0,
            Self::FiberFriend => 5.0,
            Self::WeekendWarrior => 4.0,
        }
    }
}

/// Where an achievement currently stands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AchievementState {
    /// No progress yet
    Locked,
    /// Some progress, not yet unlocked
    InProgress,
    /// Unlocked; terminal
    Unlocked,
}

/// Persisted achievement record, at most one per type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Record identifier
    pub id: Uuid,
    /// Achievement type
    pub achievement_type: AchievementType,
    /// When the achievement was first unlocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Progress in [0, 1]
    pub progress: f64,
}

impl Achievement {
    /// Fresh locked record with zero progress
    #[must_use]
    pub fn locked(achievement_type: AchievementType) -> Self {
        Self {
            id: Uuid::new_v4(),
            achievement_type,
            unlocked_at: None,
            progress: 0.0,
        }
    }

    /// Whether the achievement has been unlocked
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    /// Category of this achievement
    #[must_use]
    pub const fn category(&self) -> AchievementCategory {
        self.achievement_type.category()
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> AchievementState {
        if self.is_unlocked() {
            AchievementState::Unlocked
        } else if self.progress > 0.0 {
            AchievementState::InProgress
        } else {
            AchievementState::Locked
        }
    }
}

/// Order achievements for display: unlocked first, then higher progress, then category
pub fn sort_for_display(achievements: &mut [Achievement]) {
    achievements.sort_by(|a, b| {
        b.is_unlocked()
            .cmp(&a.is_unlocked())
            .then_with(|| b.progress.partial_cmp(&a.progress).unwrap_or(Ordering::Equal))
            .then_with(|| a.category().cmp(&b.category()))
            .then_with(|| a.achievement_type.cmp(&b.achievement_type))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_is_populated() {
        let categories = [
            AchievementCategory::Streaks,
            AchievementCategory::WeightLoss,
            AchievementCategory::Logging,
            AchievementCategory::Hydration,
            AchievementCategory::Nutrition,
            AchievementCategory::Consistency,
        ];
        for category in categories {
            assert!(
                AchievementType::ALL
                    .iter()
                    .any(|kind| kind.category() == category),
                "{category:?} has no achievements"
            );
        }
    }

    #[test]
    fn test_key_round_trips_through_serde() -> Result<(), serde_json::Error> {
        for kind in AchievementType::ALL {
            let json = serde_json::to_string(&kind)?;
            assert_eq!(json, format!("\"{}\"", kind.key()));
            assert_eq!(AchievementType::from_key(kind.key()), Some(kind));
        }
        assert_eq!(AchievementType::from_key("unknown"), None);
        Ok(())
    }

    #[test]
    fn test_state_follows_progress_and_unlock() {
        let mut achievement = Achievement::locked(AchievementType::WaterWeek);
        assert_eq!(achievement.state(), AchievementState::Locked);

        achievement.progress = 3.0 / 7.0;
        assert_eq!(achievement.state(), AchievementState::InProgress);

        achievement.progress = 1.0;
        achievement.unlocked_at = Some(Utc::now());
        assert_eq!(achievement.state(), AchievementState::Unlocked);
    }

    #[test]
    fn test_sort_for_display_puts_unlocked_first() {
        let mut unlocked = Achievement::locked(AchievementType::WeekendWarrior);
        unlocked.progress = 1.0;
        unlocked.unlocked_at = Some(Utc::now());

        let mut halfway = Achievement::locked(AchievementType::Streak30Days);
        halfway.progress = 0.5;

        let untouched = Achievement::locked(AchievementType::FirstEntry);

        let mut list = vec![untouched, halfway, unlocked];
        sort_for_display(&mut list);

        let order: Vec<_> = list.iter().map(|a| a.achievement_type).collect();
        assert_eq!(
            order,
            vec![
                AchievementType::WeekendWarrior,
                AchievementType::Streak30Days,
                AchievementType::FirstEntry,
            ]
        );
    }
}
