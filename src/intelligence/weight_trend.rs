// ABOUTME: Weight progress toward a target weight from a window of weight measurements
// ABOUTME: Progress percentage, weekly rate, days-to-goal projection and noise-filtered trend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Weight progress and trend classification
//!
//! The start weight is the oldest record in the window and the current weight
//! the newest. Projections that cannot be computed (no elapsed time, no loss)
//! are `None` rather than extrapolated.

use crate::config::TrendConfig;
use nutri_core::constants::weight_trend::DAYS_PER_WEEK;
use nutri_core::models::WeightRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of recent weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Recent weights are lower than older ones beyond the noise band
    Losing,
    /// Change within the noise band, or not enough data
    Stable,
    /// Recent weights are higher than older ones beyond the noise band
    Gaining,
}

/// Progress toward a target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    /// Newest recorded weight (kg)
    pub current_weight_kg: f64,
    /// Target weight (kg)
    pub target_weight_kg: f64,
    /// Oldest recorded weight in the window (kg)
    pub start_weight_kg: f64,
    /// Records used, ascending by date
    pub records: Vec<WeightRecord>,
    /// Trend over the most recent records
    pub trend: WeightTrend,
}

impl WeightProgress {
    /// Build progress from records in any order; `None` when there are no records
    #[must_use]
    pub fn from_records(
        target_weight_kg: f64,
        mut records: Vec<WeightRecord>,
        config: &TrendConfig,
    ) -> Option<Self> {
        records.sort_by_key(|record| record.date);
        let start_weight_kg = records.first()?.weight_kg;
        let current_weight_kg = records.last()?.weight_kg;
        let trend = classify_trend(&records, config);

        debug!(
            records = records.len(),
            start_weight_kg,
            current_weight_kg,
            target_weight_kg,
            ?trend,
            "Computed weight progress"
        );

        Some(Self {
            current_weight_kg,
            target_weight_kg,
            start_weight_kg,
            records,
            trend,
        })
    }

    /// Weight lost since the start of the window (negative when gained)
    #[must_use]
    pub fn total_lost_kg(&self) -> f64 {
        self.start_weight_kg - self.current_weight_kg
    }

    /// Weight still to lose (negative when below target)
    #[must_use]
    pub fn remaining_kg(&self) -> f64 {
        self.current_weight_kg - self.target_weight_kg
    }

    /// Share of the planned loss achieved, clamped to [0, 1]
    ///
    /// A start weight already at or below target counts as complete.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        let total_to_lose = self.start_weight_kg - self.target_weight_kg;
        if total_to_lose <= 0.0 {
            return 1.0;
        }
        (self.total_lost_kg() / total_to_lose).clamp(0.0, 1.0)
    }

    /// Whether the current weight is at or below target
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.current_weight_kg <= self.target_weight_kg
    }

    /// Average loss per week between the oldest and newest record
    ///
    /// Positive means losing. `None` with fewer than two records or when they
    /// fall on the same day.
    #[must_use]
    pub fn weekly_average_kg(&self) -> Option<f64> {
        if self.records.len() < 2 {
            return None;
        }
        let (first, last) = (self.records.first()?, self.records.last()?);
        let elapsed_days = (last.date - first.date).num_days();
        if elapsed_days <= 0 {
            return None;
        }
        let weeks = elapsed_days as f64 / DAYS_PER_WEEK;
        Some((first.weight_kg - last.weight_kg) / weeks)
    }

    /// Days until the target at the current weekly rate, truncated toward zero
    ///
    /// Only defined while losing. Once the current weight is below target the
    /// projection goes negative: the days since the target was crossed.
    #[must_use]
    pub fn estimated_days_to_goal(&self) -> Option<i64> {
        let weekly = self.weekly_average_kg().filter(|rate| *rate > 0.0)?;
        Some((self.remaining_kg() * (DAYS_PER_WEEK / weekly)) as i64)
    }
}

/// Compare the average of the newest records against the rest of the sample
///
/// `records` must be ascending by date.
fn classify_trend(records: &[WeightRecord], config: &TrendConfig) -> WeightTrend {
    if records.len() < config.min_records {
        return WeightTrend::Stable;
    }

    let sample: Vec<f64> = records
        .iter()
        .rev()
        .take(config.sample_size)
        .map(|record| record.weight_kg)
        .collect();
    let split = config.recent_count.min(sample.len());
    let (recent, older) = sample.split_at(split);
    if recent.is_empty() || older.is_empty() {
        return WeightTrend::Stable;
    }

    let recent_avg = recent.iter().sum::<f64>() / recent.len() as f64;
    let older_avg = older.iter().sum::<f64>() / older.len() as f64;
    let difference = older_avg - recent_avg;

    if difference > config.noise_band_kg {
        WeightTrend::Losing
    } else if difference < -config.noise_band_kg {
        WeightTrend::Gaining
    } else {
        WeightTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(weights: &[f64]) -> Vec<WeightRecord> {
        let start = Utc
            .with_ymd_and_hms(2025, 1, 1, 7, 0, 0)
            .single()
            .unwrap_or_default();
        weights
            .iter()
            .enumerate()
            .map(|(day, weight)| WeightRecord::new(start + Duration::days(day as i64), *weight))
            .collect()
    }

    fn progress(target: f64, weights: &[f64]) -> Option<WeightProgress> {
        WeightProgress::from_records(target, series(weights), &TrendConfig::default())
    }

    #[test]
    fn test_no_records_no_progress() {
        assert!(progress(70.0, &[]).is_none());
    }

    #[test]
    fn test_trend_losing_beyond_noise_band() {
        // Older: 85.0, 84.8, 84.6 (avg 84.8); recent: 84.0, 83.8 (avg 83.9)
        let result = progress(75.0, &[85.0, 84.8, 84.6, 84.0, 83.8]);
        assert_eq!(result.map(|p| p.trend), Some(WeightTrend::Losing));
    }

    #[test]
    fn test_trend_stable_inside_noise_band() {
        let result = progress(75.0, &[80.0, 80.2, 79.9, 80.1, 80.0]);
        assert_eq!(result.map(|p| p.trend), Some(WeightTrend::Stable));
    }

    #[test]
    fn test_trend_gaining() {
        let result = progress(75.0, &[80.0, 80.1, 80.0, 81.0, 81.2]);
        assert_eq!(result.map(|p| p.trend), Some(WeightTrend::Gaining));
    }

    #[test]
    fn test_trend_only_samples_five_newest() {
        // A large drop long ago is outside the sample
        let result = progress(70.0, &[95.0, 80.0, 80.0, 80.0, 80.0, 80.0]);
        assert_eq!(result.map(|p| p.trend), Some(WeightTrend::Stable));
    }

    #[test]
    fn test_progress_is_complete_when_start_below_target() {
        let result = progress(90.0, &[85.0, 86.0]);
        assert_eq!(result.map(|p| p.progress_percentage()), Some(1.0));
    }

    #[test]
    fn test_progress_clamped_when_weight_regained() {
        let result = progress(70.0, &[80.0, 83.0]);
        assert_eq!(result.map(|p| p.progress_percentage()), Some(0.0));
    }

    #[test]
    fn test_no_rate_for_same_day_records() {
        let day = Utc
            .with_ymd_and_hms(2025, 1, 1, 7, 0, 0)
            .single()
            .unwrap_or_default();
        let records = vec![
            WeightRecord::new(day, 80.0),
            WeightRecord::new(day + Duration::hours(12), 79.5),
        ];
        let result = WeightProgress::from_records(70.0, records, &TrendConfig::default());
        assert_eq!(result.and_then(|p| p.weekly_average_kg()), None);
    }

    #[test]
    fn test_no_eta_while_gaining() {
        let result = progress(70.0, &[80.0, 81.0]);
        let progress = result.unwrap_or_else(|| unreachable!("two records"));
        assert!(progress.weekly_average_kg().is_some_and(|rate| rate < 0.0));
        assert_eq!(progress.estimated_days_to_goal(), None);
    }

    #[test]
    fn test_eta_goes_negative_past_target() {
        // 72.0 -> 68.0 over one week: 4 kg/week, 2 kg below a 70 kg target
        let start = Utc
            .with_ymd_and_hms(2025, 1, 1, 7, 0, 0)
            .single()
            .unwrap_or_default();
        let records = vec![
            WeightRecord::new(start, 72.0),
            WeightRecord::new(start + Duration::days(7), 68.0),
        ];
        let result = WeightProgress::from_records(70.0, records, &TrendConfig::default());
        assert_eq!(result.and_then(|p| p.estimated_days_to_goal()), Some(-3));
    }
}
