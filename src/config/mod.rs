// ABOUTME: Configuration module for the analytics engine
// ABOUTME: Exposes engine thresholds with defaults, environment overrides and validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Engine configuration
//!
//! All values default to the named constants in `nutri_core::constants`.
//! Environment variables override individual settings:
//!
//! | Variable | Setting |
//! |----------|---------|
//! | `NUTRI_TREND_NOISE_BAND_KG` | `trend.noise_band_kg` |
//! | `NUTRI_TREND_MIN_RECORDS` | `trend.min_records` |
//! | `NUTRI_STREAK_MAX_DAYS` | `streak.max_days` |
//! | `NUTRI_WEIGHT_WINDOW_DAYS` | `weight.window_days` |

/// Engine configuration sections
pub mod engine;
/// Configuration errors
pub mod error;

pub use engine::{EngineConfig, MacroBalanceConfig, StreakConfig, TrendConfig, WeightWindowConfig};
pub use error::ConfigError;
