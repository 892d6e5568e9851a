// ABOUTME: Core types and constants for the Larder ingredient scaling and shopping-list engine
// ABOUTME: Foundation crate with the recipe data model, error taxonomy, and engine constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing the shared data model and error taxonomy for the
//! Larder shopping-list engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` and `ErrorCode`, the validation failures surfaced to callers
//! - **constants**: Serving limits, rounding precision, and export layout constants
//! - **models**: Recipe Store records (`Recipe`, `Ingredient`) and derived engine types

/// Engine error taxonomy with stable error codes and inline validation messages
pub mod errors;

/// Engine-wide constants organized by concern
pub mod constants;

/// Recipe, ingredient, category, and consolidated shopping-list types
pub mod models;
