// ABOUTME: Caller-side orchestration that fetches records and feeds the analytics engine
// ABOUTME: Handles concurrency, fan-out and persistence around the pure engine functions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Orchestration services
//!
//! The engine in [`crate::intelligence`] only accepts already-fetched data.
//! These services do the fetching through the [`crate::store`] traits, fan out
//! independent per-day reads and write achievement transitions back.

/// Achievement recomputation and persistence
pub mod achievements;

/// Daily, weekly and monthly summaries, weight progress and streaks
pub mod summaries;

pub use achievements::{build_context, refresh_achievements};
pub use summaries::{current_streak, daily_summary, monthly_summaries, weekly_summary, weight_progress};
