// ABOUTME: Engine configuration for ingredient scaling limits and display precision
// ABOUTME: Loads settings from LARDER_* environment variables with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::constants::{DISPLAY_DECIMALS, MAX_DISPLAY_DECIMALS, MAX_TARGET_SERVINGS};

/// Environment variable overriding the maximum target serving count
pub const MAX_SERVINGS_ENV: &str = "LARDER_MAX_SERVINGS";

/// Environment variable overriding the display precision
pub const DISPLAY_DECIMALS_ENV: &str = "LARDER_DISPLAY_DECIMALS";

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Serving-size scaling settings
    pub scaling: ScalingConfig,
}

/// Serving-size scaling settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Largest accepted target serving count (default 100); larger targets are rejected, never clamped
    pub max_target_servings: f64,
    /// Decimal places kept in scaled display quantities (default 2)
    pub display_decimals: u32,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            max_target_servings: MAX_TARGET_SERVINGS,
            display_decimals: DISPLAY_DECIMALS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults; unparsable
    /// values are logged at warn level.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = ScalingConfig::default();
        Self {
            scaling: ScalingConfig {
                max_target_servings: env_parse_or(MAX_SERVINGS_ENV, defaults.max_target_servings),
                display_decimals: env_parse_or(DISPLAY_DECIMALS_ENV, defaults.display_decimals),
            },
        }
    }

    /// Load configuration from the environment and validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the loaded values fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate all settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scaling.validate()
    }
}

impl ScalingConfig {
    /// Validate scaling limits and precision
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the maximum is not a finite
    /// positive number, or `ConfigError::InvalidRange` if the precision is
    /// above the supported maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_target_servings.is_finite() || self.max_target_servings <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_target_servings must be a finite number greater than 0",
            ));
        }
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::InvalidRange(
                "display_decimals must be between 0 and 6",
            ));
        }
        Ok(())
    }
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(env.key = %key, env.value = %raw, "Ignoring unparsable configuration value");
            default
        }),
        Err(_) => default,
    }
}
