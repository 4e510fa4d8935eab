// ABOUTME: Consecutive logging-day streak counted backward from a reference day
// ABOUTME: Bounded day-walk over an injected day-has-entries check with best-effort failure handling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::StreakConfig;
use chrono::NaiveDate;
use std::fmt::Display;
use tracing::{debug, warn};

/// Counts consecutive days with at least one food record
///
/// The walk starts at the reference day and moves back one day at a time.
/// It stops at the first day without entries, after `max_days` days, or at the
/// first error from the day check; in every case the count so far is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakCalculator {
    max_days: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::from_config(&StreakConfig::default())
    }
}

impl StreakCalculator {
    /// Calculator inspecting at most `max_days` days
    #[must_use]
    pub const fn new(max_days: u32) -> Self {
        Self { max_days }
    }

    /// Calculator bounded by the configured walk length
    #[must_use]
    pub const fn from_config(config: &StreakConfig) -> Self {
        Self::new(config.max_days)
    }

    /// Upper bound on inspected days
    #[must_use]
    pub const fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Walk back from `reference` while `has_entries_on` reports logged days
    pub fn count<E, F>(&self, reference: NaiveDate, mut has_entries_on: F) -> u32
    where
        E: Display,
        F: FnMut(NaiveDate) -> Result<bool, E>,
    {
        let mut streak = 0;
        let mut day = Some(reference);

        while let Some(current) = day {
            if streak >= self.max_days {
                warn!(
                    max_days = self.max_days,
                    %reference,
                    "Streak walk reached its safety bound"
                );
                break;
            }
            match has_entries_on(current) {
                Ok(true) => streak += 1,
                Ok(false) => break,
                Err(e) => {
                    warn!(%current, streak, "Streak walk stopped early: {e}");
                    break;
                }
            }
            day = current.pred_opt();
        }

        debug!(%reference, streak, "Computed logging streak");
        streak
    }
}
