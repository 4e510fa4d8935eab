// ABOUTME: Integration test for installing the engine's global tracing subscriber
// ABOUTME: Kept in its own test binary so no other test has installed a subscriber first
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutri_balance::intelligence::DailySummary;
use nutri_balance::logging::{LogFormat, LoggingConfig};
use nutri_core::models::Goals;
use tracing::Level;

mod common;
use common::date;

#[test]
fn test_subscriber_installs_once() {
    let config = LoggingConfig {
        engine_level: Level::DEBUG,
        format: LogFormat::Json,
    };

    assert!(config.init().is_ok());

    // Engine events flow through the installed subscriber
    let summary = DailySummary::new(
        date(2025, 3, 1),
        Vec::new(),
        Vec::new(),
        Goals::with_target_weight(70.0),
    );
    assert_eq!(summary.total_calories, 0);

    assert!(LoggingConfig::default().init().is_err());
}
