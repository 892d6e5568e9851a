// ABOUTME: Recipe Store records consumed by the shopping-list engine
// ABOUTME: Defines Recipe and Ingredient with the store's camelCase wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe
///
/// Immutable once read from the Recipe Store. The store guarantees a
/// non-negative quantity and non-empty name and unit; the engine does not
/// re-validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display name, e.g. "cherry tomatoes"
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit abbreviation as entered, e.g. "g", "cup", "tsp"
    pub unit: String,
    /// Whether the quantity follows the serving count
    pub scalable: bool,
}

impl Ingredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        scalable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            scalable,
        }
    }

    /// Create a scalable ingredient
    #[must_use]
    pub fn scalable(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self::new(name, quantity, unit, true)
    }

    /// Create an ingredient that does not follow the serving count (e.g. "salt to taste")
    #[must_use]
    pub fn fixed(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self::new(name, quantity, unit, false)
    }

    /// Name trimmed and lowercased, as used for keying and keyword matching
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Unit trimmed and lowercased
    #[must_use]
    pub fn normalized_unit(&self) -> String {
        self.unit.trim().to_lowercase()
    }
}

/// Recipe record as supplied by the Recipe Store
///
/// Only the fields the engine reads are modelled; anything else in the stored
/// record (steps, tags, social counters) is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: String,
    /// Human-readable title
    #[serde(default)]
    pub title: String,
    /// Serving count the ingredient quantities are written for
    pub servings: f64,
    /// Ingredients in list order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create a recipe with no ingredients
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, servings: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Replace the ingredient list
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }
}
