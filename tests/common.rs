// ABOUTME: Shared recipe fixtures for larder integration tests
// ABOUTME: Provides sample recipes and helpers for building ingredient lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test fixtures for `larder`

use larder::models::{ConsolidatedItem, Ingredient, Recipe};

/// Tomato soup for four: shares tomato with the salad
pub fn tomato_soup() -> Recipe {
    Recipe::new("r1", "Tomato Soup", 4.0).with_ingredients(vec![
        Ingredient::scalable("tomato", 2.0, "cup"),
        Ingredient::scalable("onion", 1.0, "pc"),
        Ingredient::scalable("butter", 2.0, "tbsp"),
        Ingredient::fixed("salt", 1.0, "tsp"),
    ])
}

/// Side salad for two
pub fn garden_salad() -> Recipe {
    Recipe::new("r2", "Garden Salad", 2.0).with_ingredients(vec![
        Ingredient::scalable("tomato", 1.0, "cup"),
        Ingredient::scalable("lettuce", 1.0, "head"),
        Ingredient::scalable("olive oil", 2.0, "tbsp"),
        Ingredient::fixed("salt", 0.5, "tsp"),
    ])
}

/// Carbonara for four
pub fn carbonara() -> Recipe {
    Recipe::new("r3", "Spaghetti Carbonara", 4.0).with_ingredients(vec![
        Ingredient::scalable("spaghetti", 400.0, "g"),
        Ingredient::scalable("pancetta", 150.0, "g"),
        Ingredient::scalable("egg", 3.0, "pc"),
        Ingredient::scalable("parmesan cheese", 50.0, "g"),
        Ingredient::fixed("black pepper", 1.0, "tsp"),
    ])
}

/// Every sample recipe in catalog order
pub fn sample_recipes() -> Vec<Recipe> {
    vec![tomato_soup(), garden_salad(), carbonara()]
}

/// Consolidated lines with this exact name and unit
pub fn find_lines<'a>(
    items: &'a [ConsolidatedItem],
    name: &str,
    unit: &str,
) -> Vec<&'a ConsolidatedItem> {
    items
        .iter()
        .filter(|item| item.name == name && item.unit == unit)
        .collect()
}

/// Sample recipes as a Recipe Store JSON export
pub fn sample_recipes_json() -> String {
    serde_json::to_string_pretty(&sample_recipes()).expect("fixtures serialize")
}
