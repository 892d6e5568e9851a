// ABOUTME: Serving-size limits and rounding precision constants for ingredient scaling
// ABOUTME: Shared by the scaling calculator, its configuration, and the list formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Largest target serving count accepted by the scaling calculator
pub const MAX_TARGET_SERVINGS: f64 = 100.0;

/// Decimal places kept when displaying a scaled or summed quantity
pub const DISPLAY_DECIMALS: u32 = 2;

/// Upper bound for a configured display precision
pub const MAX_DISPLAY_DECIMALS: u32 = 6;
