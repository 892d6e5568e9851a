// ABOUTME: Tests for environment-driven engine configuration
// ABOUTME: Validates defaults, LARDER_* overrides, fallbacks, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use larder::config::engine::{DISPLAY_DECIMALS_ENV, MAX_SERVINGS_ENV};
use larder::config::{ConfigError, EngineConfig, ScalingConfig};
use larder::errors::ErrorCode;
use larder::shopping::ScalingCalculator;
use serial_test::serial;

fn clear_env() {
    env::remove_var(MAX_SERVINGS_ENV);
    env::remove_var(DISPLAY_DECIMALS_ENV);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::load().unwrap();

    assert!((config.scaling.max_target_servings - 100.0).abs() < f64::EPSILON);
    assert_eq!(config.scaling.display_decimals, 2);
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(MAX_SERVINGS_ENV, "24");
    env::set_var(DISPLAY_DECIMALS_ENV, " 3 ");

    let config = EngineConfig::load().unwrap();
    assert!((config.scaling.max_target_servings - 24.0).abs() < f64::EPSILON);
    assert_eq!(config.scaling.display_decimals, 3);

    let calculator = ScalingCalculator::new(config.scaling);
    assert_eq!(
        calculator.validate_target(25.0).unwrap_err().code(),
        ErrorCode::ServingsOutOfRange
    );
    clear_env();
}

#[test]
#[serial]
fn test_unparsable_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(MAX_SERVINGS_ENV, "lots");
    env::set_var(DISPLAY_DECIMALS_ENV, "-1");

    let config = EngineConfig::from_env();
    assert_eq!(config.scaling, ScalingConfig::default());
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() {
    clear_env();
    env::set_var(MAX_SERVINGS_ENV, "0");
    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    env::set_var(MAX_SERVINGS_ENV, "inf");
    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
    env::set_var(DISPLAY_DECIMALS_ENV, "9");
    assert!(matches!(
        EngineConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));
    clear_env();
}

#[test]
fn test_scaling_config_validation() {
    let config = ScalingConfig {
        max_target_servings: f64::NAN,
        display_decimals: 2,
    };
    assert!(config.validate().is_err());
    assert!(ScalingConfig::default().validate().is_ok());
}
