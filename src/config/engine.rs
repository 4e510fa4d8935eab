// ABOUTME: Tunable thresholds for the analytics engine with environment overrides
// ABOUTME: Weight trend noise band, streak safety bound, weight window and macro balance ranges
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::error::ConfigError;
use nutri_core::constants::{macro_balance, streak, weight_trend};
use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weight trend classification
    pub trend: TrendConfig,
    /// Streak day-walk
    pub streak: StreakConfig,
    /// Weight history window
    pub weight: WeightWindowConfig,
    /// Balanced macro distribution ranges
    pub macro_balance: MacroBalanceConfig,
}

/// Weight trend classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Average difference (kg) that must be exceeded to call a trend losing or gaining
    pub noise_band_kg: f64,
    /// Records required before a trend is classified
    pub min_records: usize,
    /// Most recent records sampled
    pub sample_size: usize,
    /// Sampled records forming the recent average; the rest form the older average
    pub recent_count: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            noise_band_kg: weight_trend::NOISE_BAND_KG,
            min_records: weight_trend::MIN_RECORDS,
            sample_size: weight_trend::SAMPLE_SIZE,
            recent_count: weight_trend::RECENT_COUNT,
        }
    }
}

/// Streak walk bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Maximum number of days inspected, reference day included
    pub max_days: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            max_days: streak::MAX_DAYS,
        }
    }
}

/// How much weight history the caller fetches for progress computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightWindowConfig {
    /// Days of history, counted back from today
    pub window_days: u32,
}

impl Default for WeightWindowConfig {
    fn default() -> Self {
        Self {
            window_days: weight_trend::WINDOW_DAYS,
        }
    }
}

/// Inclusive percentage ranges a balanced day must satisfy for all three macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroBalanceConfig {
    /// Protein share of macro calories (%)
    pub protein_percent: RangeInclusive<f64>,
    /// Carbohydrate share of macro calories (%)
    pub carbs_percent: RangeInclusive<f64>,
    /// Fat share of macro calories (%)
    pub fat_percent: RangeInclusive<f64>,
}

impl Default for MacroBalanceConfig {
    fn default() -> Self {
        Self {
            protein_percent: macro_balance::PROTEIN_MIN_PERCENT
                ..=macro_balance::PROTEIN_MAX_PERCENT,
            carbs_percent: macro_balance::CARBS_MIN_PERCENT..=macro_balance::CARBS_MAX_PERCENT,
            fat_percent: macro_balance::FAT_MIN_PERCENT..=macro_balance::FAT_MAX_PERCENT,
        }
    }
}

impl EngineConfig {
    /// Process-wide configuration, loaded from the environment on first use
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let trend = &self.trend;
        if !trend.noise_band_kg.is_finite() || trend.noise_band_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.noise_band_kg must be a finite value >= 0",
            ));
        }
        if trend.min_records < 2 {
            return Err(ConfigError::ValueOutOfRange("trend.min_records must be >= 2"));
        }
        if trend.recent_count == 0 || trend.recent_count >= trend.sample_size {
            return Err(ConfigError::InvalidRange(
                "trend.recent_count must be > 0 and < trend.sample_size",
            ));
        }
        if self.streak.max_days == 0 {
            return Err(ConfigError::ValueOutOfRange("streak.max_days must be >= 1"));
        }
        if self.weight.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("weight.window_days must be >= 1"));
        }

        let balance = &self.macro_balance;
        for (range, name) in [
            (&balance.protein_percent, "macro_balance.protein_percent min must be <= max"),
            (&balance.carbs_percent, "macro_balance.carbs_percent min must be <= max"),
            (&balance.fat_percent, "macro_balance.fat_percent min must be <= max"),
        ] {
            if range.start() > range.end() {
                return Err(ConfigError::InvalidRange(name));
            }
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRI_TREND_NOISE_BAND_KG", &mut self.trend.noise_band_kg)?;
        Self::apply_env_var("NUTRI_TREND_MIN_RECORDS", &mut self.trend.min_records)?;
        Self::apply_env_var("NUTRI_STREAK_MAX_DAYS", &mut self.streak.max_days)?;
        Self::apply_env_var("NUTRI_WEIGHT_WINDOW_DAYS", &mut self.weight.window_days)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_recent_count_must_leave_older_records() {
        let mut config = EngineConfig::default();
        config.trend.recent_count = config.trend.sample_size;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_inverted_macro_range_is_rejected() {
        let mut config = EngineConfig::default();
        config.macro_balance.fat_percent = 35.0..=20.0;
        assert!(config.validate().is_err());
    }
}
