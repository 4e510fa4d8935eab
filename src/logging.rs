// ABOUTME: Optional tracing subscriber setup for hosts embedding the analytics engine
// ABOUTME: Picks an output format and scopes the engine's log level through an env filter
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Subscriber setup
//!
//! The engine emits `tracing` events under the `nutri_balance` and `nutri_core`
//! targets and never installs a subscriber on its own. A host with no logging
//! of its own calls [`LoggingConfig::init`] once at startup.
//!
//! | Variable           | Values                        | Default   |
//! |--------------------|-------------------------------|-----------|
//! | `NUTRI_LOG_LEVEL`  | `trace` .. `error`            | `info`    |
//! | `NUTRI_LOG_FORMAT` | `json`, `full`, `compact`     | `compact` |
//!
//! Other crates are held at `warn`.

use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Level applied to every target outside the engine crates
const OTHER_TARGETS_LEVEL: Level = Level::WARN;

/// Output format for engine events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human readable lines with targets
    Full,
    /// Single-line output without targets
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse a format name, case-insensitive
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "full" => Some(Self::Full),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for the engine crates
    pub engine_level: Level,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            engine_level: Level::INFO,
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Read `NUTRI_LOG_LEVEL` and `NUTRI_LOG_FORMAT`, ignoring unrecognized values
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let engine_level = env::var("NUTRI_LOG_LEVEL")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.engine_level);
        let format = env::var("NUTRI_LOG_FORMAT")
            .ok()
            .and_then(|value| LogFormat::from_name(&value))
            .unwrap_or(defaults.format);

        Self {
            engine_level,
            format,
        }
    }

    /// Filter directives: other targets at `warn`, engine crates at `engine_level`
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let level = self.engine_level.as_str();
        format!("{OTHER_TARGETS_LEVEL},nutri_balance={level},nutri_core={level}")
    }

    /// Install a global subscriber writing to stderr
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let layer = match self.format {
            LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
            LogFormat::Full => fmt::layer()
                .with_target(true)
                .with_writer(io::stderr)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(layer)
            .with(EnvFilter::new(self.filter_directives()))
            .try_init()?;

        debug!(
            level = %self.engine_level,
            format = ?self.format,
            "Engine logging initialized"
        );
        Ok(())
    }
}
