// ABOUTME: Benchmark fixtures for generating recipe catalogs
// ABOUTME: Provides deterministic recipe generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic recipe catalogs with a realistic share of overlapping ingredients.

use larder::models::{Ingredient, Recipe};

/// Ingredient names cycled through generated recipes
const PANTRY: &[(&str, &str)] = &[
    ("tomato", "cup"),
    ("onion", "pc"),
    ("garlic", "clove"),
    ("olive oil", "tbsp"),
    ("butter", "tbsp"),
    ("milk", "cup"),
    ("chicken breast", "g"),
    ("salmon", "g"),
    ("flour", "cup"),
    ("sugar", "g"),
    ("rice", "cup"),
    ("basil", "bunch"),
    ("cumin", "tsp"),
    ("lemon", "pc"),
    ("parsley", "bunch"),
    ("chickpeas", "can"),
];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecipeBatchSize {
    /// A weekly meal plan (7 recipes)
    Week,
    /// A month of dinners (30 recipes)
    Month,
    /// A large selection (200 recipes)
    Catalog,
}

impl RecipeBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Catalog => 200,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn generate_recipe(index: usize) -> Recipe {
    let ingredient_count = 6 + index % 7;
    let ingredients = (0..ingredient_count)
        .map(|offset| {
            let (name, unit) = PANTRY[(index * 3 + offset) % PANTRY.len()];
            let quantity = 0.25 * (1 + (index + offset) % 8) as f64;
            if offset % 5 == 4 {
                Ingredient::fixed("salt", 1.0, "pinch")
            } else {
                Ingredient::scalable(name, quantity, unit)
            }
        })
        .collect();

    Recipe::new(
        format!("bench_recipe_{index}"),
        format!("Benchmark Recipe {index}"),
        (2 + index % 5) as f64,
    )
    .with_ingredients(ingredients)
}

/// Generate a deterministic recipe selection
#[must_use]
pub fn generate_recipes(size: RecipeBatchSize) -> Vec<Recipe> {
    (0..size.count()).map(generate_recipe).collect()
}
