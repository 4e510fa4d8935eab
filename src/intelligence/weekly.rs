// ABOUTME: Multi-day rollups over daily summaries for weekly and monthly views
// ABOUTME: Averages, goal-day counts, best and highest days, local logging streak and calendar bounds
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::aggregation::DailySummary;
use chrono::{Datelike, Days, NaiveDate};
use nutri_core::models::{DrinkRecord, FoodRecord, Goals};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered sequence of daily summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// First day covered
    pub start_date: NaiveDate,
    /// Last day covered
    pub end_date: NaiveDate,
    /// One summary per day, ascending by date
    pub daily_summaries: Vec<DailySummary>,
}

impl WeeklySummary {
    /// Build from per-day summaries; days are ordered by date
    #[must_use]
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        mut daily_summaries: Vec<DailySummary>,
    ) -> Self {
        daily_summaries.sort_by_key(|summary| summary.date);
        Self {
            start_date,
            end_date,
            daily_summaries,
        }
    }

    fn day_count(&self) -> usize {
        self.daily_summaries.len()
    }

    /// Sum of calories across all days
    #[must_use]
    pub fn total_calories(&self) -> i32 {
        self.daily_summaries
            .iter()
            .map(|day| day.total_calories)
            .fold(0, i32::saturating_add)
    }

    /// Mean daily calories, truncated to an integer; 0 with no days
    #[must_use]
    pub fn average_calories(&self) -> i32 {
        match i32::try_from(self.day_count()) {
            Ok(days) if days > 0 => self.total_calories() / days,
            _ => 0,
        }
    }

    /// Mean daily protein (g); 0 with no days
    #[must_use]
    pub fn average_protein_g(&self) -> f64 {
        self.mean_of(|day| day.total_protein_g)
    }

    /// Mean daily effective hydration (ml); 0 with no days
    #[must_use]
    pub fn average_hydration_ml(&self) -> f64 {
        self.mean_of(|day| day.effective_hydration_ml)
    }

    fn mean_of(&self, value: impl Fn(&DailySummary) -> f64) -> f64 {
        if self.daily_summaries.is_empty() {
            return 0.0;
        }
        self.daily_summaries.iter().map(value).sum::<f64>() / self.day_count() as f64
    }

    /// Days at or under the calorie goal
    #[must_use]
    pub fn days_within_calorie_goal(&self) -> usize {
        self.daily_summaries
            .iter()
            .filter(|day| !day.is_over_calorie_goal())
            .count()
    }

    /// Days whose effective hydration reached the water goal
    #[must_use]
    pub fn days_met_water_goal(&self) -> usize {
        self.daily_summaries
            .iter()
            .filter(|day| day.met_water_goal())
            .count()
    }

    /// Consecutive days with food, counted back from the latest day in this window
    ///
    /// Only looks at the days held here, unlike the store-backed streak.
    #[must_use]
    pub fn logging_streak(&self) -> usize {
        self.daily_summaries
            .iter()
            .rev()
            .take_while(|day| day.has_food_entries())
            .count()
    }

    /// Lowest-calorie day among days with food; the earliest wins ties
    #[must_use]
    pub fn best_day(&self) -> Option<&DailySummary> {
        self.daily_summaries
            .iter()
            .filter(|day| day.has_food_entries())
            .min_by_key(|day| day.total_calories)
    }

    /// Highest-calorie day, empty days included; the earliest wins ties
    #[must_use]
    pub fn highest_calorie_day(&self) -> Option<&DailySummary> {
        self.daily_summaries
            .iter()
            .rev()
            .max_by_key(|day| day.total_calories)
    }
}

/// Monday and Sunday of the ISO week containing `date`
#[must_use]
pub fn iso_week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// First and last day of the calendar month containing `date`
#[must_use]
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month.and_then(|first| first.pred_opt()).unwrap_or(date);
    (start, end)
}

/// Every day from `start` through `end`, inclusive
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Bucket range-fetched records by calendar day and summarize every day in the range
///
/// Days with no records still get an empty summary. Records outside the range
/// are ignored.
#[must_use]
pub fn summarize_range(
    start: NaiveDate,
    end: NaiveDate,
    food_records: Vec<FoodRecord>,
    drink_records: Vec<DrinkRecord>,
    goals: &Goals,
) -> Vec<DailySummary> {
    let mut food_by_day: HashMap<NaiveDate, Vec<FoodRecord>> = HashMap::new();
    for record in food_records {
        food_by_day.entry(record.day()).or_default().push(record);
    }
    let mut drinks_by_day: HashMap<NaiveDate, Vec<DrinkRecord>> = HashMap::new();
    for record in drink_records {
        drinks_by_day.entry(record.day()).or_default().push(record);
    }

    days_between(start, end)
        .into_iter()
        .map(|day| {
            DailySummary::new(
                day,
                food_by_day.remove(&day).unwrap_or_default(),
                drinks_by_day.remove(&day).unwrap_or_default(),
                goals.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_iso_week_starts_monday() {
        // 2025-03-13 is a Thursday
        let (start, end) = iso_week_bounds(date(2025, 3, 13));
        assert_eq!(start, date(2025, 3, 10));
        assert_eq!(end, date(2025, 3, 16));

        let (start, _) = iso_week_bounds(date(2025, 3, 10));
        assert_eq!(start, date(2025, 3, 10));
    }

    #[test]
    fn test_month_bounds_handle_leap_year_and_december() {
        assert_eq!(
            month_bounds(date(2024, 2, 14)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_bounds(date(2025, 12, 31)),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn test_empty_week_has_zero_averages() {
        let week = WeeklySummary::new(date(2025, 3, 10), date(2025, 3, 16), Vec::new());
        assert_eq!(week.average_calories(), 0);
        assert!(week.average_protein_g().abs() < f64::EPSILON);
        assert_eq!(week.logging_streak(), 0);
        assert!(week.best_day().is_none());
        assert!(week.highest_calorie_day().is_none());
    }
}
