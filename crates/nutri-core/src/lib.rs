// ABOUTME: Core types and constants for the NutriBalance analytics engine
// ABOUTME: Foundation crate with records, goals, achievements, error handling and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriBalance Core
//!
//! Foundation crate providing the shared data model for the NutriBalance
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition and hydration constants organized by domain
//! - **models**: Food, drink and weight records, goals and achievements

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants (Atwater factors, hydration factors, achievement targets)
pub mod constants;

/// Core data models (records, goals, achievements)
pub mod models;
