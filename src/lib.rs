// ABOUTME: Main library entry point for the Larder shopping-list engine
// ABOUTME: Provides ingredient scaling, consolidation, categorization, and plain-text export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder
//!
//! Ingredient scaling and shopping-list consolidation for a recipe catalog.
//! The engine consumes plain recipe records supplied by a Recipe Store and
//! returns data structures or text to a Presentation Layer. It never performs
//! storage I/O itself; every call recomputes its result from the snapshot it
//! is given.
//!
//! ## Components
//!
//! - **`ScalingCalculator`**: rescales one ingredient (or a whole recipe) to a target serving count
//! - **`ConsolidationEngine`**: merges ingredients across recipes into a deduplicated list
//! - **`CategoryClassifier`**: files every consolidated line under one of six fixed categories
//! - **`ListFormatter`**: renders the canonical plain-text export
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder::models::{Ingredient, Recipe};
//! use larder::shopping::build_shopping_list;
//!
//! let soup = Recipe::new("r1", "Tomato Soup", 4.0)
//!     .with_ingredient(Ingredient::scalable("tomato", 2.0, "cup"));
//! let salad = Recipe::new("r2", "Salad", 2.0)
//!     .with_ingredient(Ingredient::scalable("tomato", 1.0, "cup"));
//!
//! let export = build_shopping_list(&[soup, salad]);
//! assert!(export.contains("☐ 3 cup tomato"));
//! ```

// Re-export the foundation crate so callers need a single dependency
pub use larder_core::{constants, errors, models};

/// Environment-driven engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Scaling, consolidation, categorization, and export
pub mod shopping;
