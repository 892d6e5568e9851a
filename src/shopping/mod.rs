// ABOUTME: Shopping-list engine combining scaling, consolidation, classification, and export
// ABOUTME: Offers the ShoppingList view model and the build_shopping_list convenience pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping-list engine
//!
//! Pipeline: selected recipes → [`ConsolidationEngine`] → [`CategoryClassifier`]
//! → [`ListFormatter`]. [`ScalingCalculator`] stands apart and serves the
//! single-recipe serving-size view.
//!
//! Consolidation always works on the stored quantities of each recipe, never
//! on a scaled view.

/// Grocery-aisle categorization rules
pub mod classifier;
/// Cross-recipe ingredient merging
pub mod consolidation;
/// Plain-text export rendering
pub mod formatter;
/// Rounding and number rendering
pub mod quantity;
/// Serving-size scaling
pub mod scaling;

use serde::{Deserialize, Serialize};

use crate::models::{CategorizedList, ConsolidatedItem, Recipe, ShoppingListSummary};

pub use classifier::{
    CategoryClassifier, ClassificationRule, Matcher, CLASSIFICATION_RULES,
    DAIRY_AND_EGGS_KEYWORDS, MEAT_AND_SEAFOOD_KEYWORDS, PANTRY_UNITS, PRODUCE_KEYWORDS,
    SPICES_AND_SEASONINGS_KEYWORDS,
};
pub use consolidation::ConsolidationEngine;
pub use formatter::{ExportFormat, ListFormatter};
pub use quantity::{render_quantity, round_half_up};
pub use scaling::{scaling_factor, ScalingCalculator};

/// Everything the shopping-list view shows for one recipe selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Titles of the source recipes, in selection order
    pub source_recipe_titles: Vec<String>,
    /// Header counters
    pub summary: ShoppingListSummary,
    /// Consolidated lines sorted by name
    pub items: Vec<ConsolidatedItem>,
    /// The same lines grouped by category
    pub categorized: CategorizedList,
}

impl ShoppingList {
    /// Build the list with the default engine components
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        Self::build(
            recipes,
            &ConsolidationEngine::new(),
            &CategoryClassifier::default(),
        )
    }

    /// Build the list with explicit engine components
    #[must_use]
    pub fn build(
        recipes: &[Recipe],
        engine: &ConsolidationEngine,
        classifier: &CategoryClassifier,
    ) -> Self {
        let items = engine.consolidate(recipes);
        let summary = engine.summarize(recipes, &items);
        let categorized = classifier.categorize(&items);

        Self {
            source_recipe_titles: recipes.iter().map(|recipe| recipe.title.clone()).collect(),
            summary,
            items,
            categorized,
        }
    }

    /// Canonical text export
    #[must_use]
    pub fn to_text(&self, formatter: &ListFormatter) -> String {
        formatter.format(&self.categorized, &self.source_recipe_titles)
    }

    /// Render in the requested export format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(
        &self,
        format: ExportFormat,
        formatter: &ListFormatter,
    ) -> serde_json::Result<String> {
        match format {
            ExportFormat::Text => Ok(self.to_text(formatter)),
            ExportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

/// Consolidate, categorize, and format `recipes` into the canonical text export
#[must_use]
pub fn build_shopping_list(recipes: &[Recipe]) -> String {
    ShoppingList::from_recipes(recipes).to_text(&ListFormatter::default())
}
