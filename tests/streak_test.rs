// ABOUTME: Integration tests for the bounded backward day-walk used for logging streaks
// ABOUTME: Covers gaps, the safety bound, capability failures and month boundaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutri_balance::config::StreakConfig;
use nutri_balance::intelligence::StreakCalculator;
use std::collections::HashSet;
use std::convert::Infallible;

mod common;
use common::{date, init_test_logging};

fn logged(days: &[NaiveDate]) -> HashSet<NaiveDate> {
    days.iter().copied().collect()
}

#[test]
fn test_empty_reference_day_breaks_immediately() {
    init_test_logging();
    let days = logged(&[date(2025, 6, 9), date(2025, 6, 8)]);

    let streak = StreakCalculator::default()
        .count(date(2025, 6, 10), |day| Ok::<_, Infallible>(days.contains(&day)));

    assert_eq!(streak, 0);
}

#[test]
fn test_counts_across_month_boundary() {
    init_test_logging();
    let days = logged(&[
        date(2025, 3, 2),
        date(2025, 3, 1),
        date(2025, 2, 28),
        date(2025, 2, 27),
        date(2025, 2, 25),
    ]);

    let streak = StreakCalculator::default()
        .count(date(2025, 3, 2), |day| Ok::<_, Infallible>(days.contains(&day)));

    assert_eq!(streak, 4);
}

#[test]
fn test_always_logged_stops_at_safety_bound() {
    init_test_logging();
    let mut calls = 0_u32;

    let streak = StreakCalculator::default().count(date(2025, 12, 31), |_| {
        calls += 1;
        Ok::<_, Infallible>(true)
    });

    assert_eq!(streak, 365);
    assert_eq!(calls, 365);
}

#[test]
fn test_configured_bound_is_respected() {
    init_test_logging();
    let calculator = StreakCalculator::from_config(&StreakConfig { max_days: 10 });
    assert_eq!(calculator.max_days(), 10);

    let streak = calculator.count(date(2025, 12, 31), |_| Ok::<_, Infallible>(true));

    assert_eq!(streak, 10);
}

#[test]
fn test_failed_check_returns_partial_count() {
    init_test_logging();
    let failing_day = date(2025, 6, 7);

    let streak = StreakCalculator::default().count(date(2025, 6, 10), |day| {
        if day == failing_day {
            Err("record store unavailable")
        } else {
            Ok(true)
        }
    });

    // 10th, 9th and 8th counted before the failure on the 7th
    assert_eq!(streak, 3);
}

#[test]
fn test_walk_stops_at_earliest_representable_date() {
    init_test_logging();

    let streak = StreakCalculator::new(5).count(NaiveDate::MIN, |_| Ok::<_, Infallible>(true));

    assert_eq!(streak, 1);
}
