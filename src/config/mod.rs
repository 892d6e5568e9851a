// ABOUTME: Configuration management module for engine settings loaded from the environment
// ABOUTME: Exposes scaling limits and precision with validation and typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Larder
//!
//! Configuration is environment-only: there is no config file. Every setting
//! has a default matching the engine's documented behaviour, so an empty
//! environment yields a valid configuration.
//!
//! - **Engine**: serving-size limits and display precision for scaling
//! - **Error**: validation and parse failures for configuration values

/// Engine configuration (scaling limits, display precision)
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{EngineConfig, ScalingConfig};
pub use error::ConfigError;
