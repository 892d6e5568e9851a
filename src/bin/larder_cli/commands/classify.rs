// ABOUTME: Classify command for the larder CLI
// ABOUTME: Prints the shopping-list category for a single ingredient name and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder::shopping::CategoryClassifier;

use crate::helpers::display::display_category;

/// Classify one ingredient with the default rule table
pub fn run(name: &str, unit: &str) {
    let category = CategoryClassifier::default().classify_parts(name, unit);
    display_category(name, category);
}
