// ABOUTME: Constants module with concern-separated organization
// ABOUTME: Serving limits, rounding precision, and export layout for the shopping-list engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the component that owns them rather than kept in a
//! single flat list.

/// Serving-size limits and rounding precision for ingredient scaling
pub mod scaling;

/// Canonical plain-text export layout
pub mod export;

pub use export::*;
pub use scaling::*;

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the `larder` binary in startup logs
    pub const LARDER: &str = "larder";
}
