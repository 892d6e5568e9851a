// ABOUTME: Engine output types for scaling and shopping-list consolidation
// ABOUTME: Defines ConsolidatedItem, ConsolidationKey, CategorizedList, and scaled views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::recipe::Ingredient;

/// Merge identity of an ingredient: `lowercase(trim(name)) + "-" + lowercase(trim(unit))`
///
/// Scalability is deliberately not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsolidationKey(String);

impl ConsolidationKey {
    /// Compute the key for an ingredient
    #[must_use]
    pub fn for_ingredient(ingredient: &Ingredient) -> Self {
        Self(format!(
            "{}-{}",
            ingredient.normalized_name(),
            ingredient.normalized_unit()
        ))
    }

    /// Key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConsolidationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// One line of a consolidated shopping list
///
/// Carries the first contributing ingredient's name, unit, and scalability,
/// the (possibly summed) raw quantity, and every recipe that contributed to
/// the line in contribution order. `recipe_ids` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedItem {
    /// Display name taken from the first contribution
    pub name: String,
    /// Raw quantity, summed across merged contributions and never pre-rounded
    pub quantity: f64,
    /// Unit taken from the first contribution
    pub unit: String,
    /// Whether this line scales with servings
    pub scalable: bool,
    /// Contributing recipe identifiers in insertion order
    pub recipe_ids: Vec<String>,
}

impl ConsolidatedItem {
    /// Start a line from a single recipe contribution
    #[must_use]
    pub fn from_contribution(ingredient: &Ingredient, recipe_id: &str) -> Self {
        Self {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            scalable: ingredient.scalable,
            recipe_ids: vec![recipe_id.to_owned()],
        }
    }

    /// Merge key of this line
    #[must_use]
    pub fn key(&self) -> ConsolidationKey {
        ConsolidationKey(format!(
            "{}-{}",
            self.normalized_name(),
            self.unit.trim().to_lowercase()
        ))
    }

    /// Name trimmed and lowercased
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Number of contributions merged into this line
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipe_ids.len()
    }

    /// True when more than one contribution was merged ("Used in N recipes")
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.recipe_ids.len() > 1
    }

    /// True for lines the shopper should adjust to taste
    #[must_use]
    pub const fn needs_taste_adjustment(&self) -> bool {
        !self.scalable
    }

    /// Logical identity for re-associating check marks across recomputation
    #[must_use]
    pub fn identity(&self, category: Category) -> ItemIdentity {
        ItemIdentity {
            name: self.normalized_name(),
            unit: self.unit.trim().to_lowercase(),
            category,
        }
    }
}

/// Normalized name + unit + category of a shopping-list line
///
/// Owned by the Presentation Layer's check-off state; the engine only produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemIdentity {
    /// Trimmed, lowercased name
    pub name: String,
    /// Trimmed, lowercased unit
    pub unit: String,
    /// Category the line was filed under
    pub category: Category,
}

/// Consolidated items grouped by category
///
/// Iteration follows canonical category order and skips empty categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedList {
    groups: BTreeMap<Category, Vec<ConsolidatedItem>>,
}

impl CategorizedList {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of its category
    pub fn push(&mut self, category: Category, item: ConsolidatedItem) {
        self.groups.entry(category).or_default().push(item);
    }

    /// Items filed under `category`, in insertion order
    #[must_use]
    pub fn items(&self, category: Category) -> &[ConsolidatedItem] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Non-empty categories with their items, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ConsolidatedItem])> + '_ {
        self.groups
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, items)| (*category, items.as_slice()))
    }

    /// Number of non-empty categories
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.iter().count()
    }

    /// Total number of items across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when no category holds any item
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display quantity of one ingredient after scaling
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    /// Quantity to show (rounded when scaled, verbatim otherwise)
    pub display_quantity: f64,
    /// True when a scalable quantity was rescaled to a different serving count
    pub scaled: bool,
    /// True when the recipe is being scaled but this ingredient does not follow
    pub needs_manual_adjustment: bool,
}

/// An ingredient paired with its scaled display quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredientLine {
    /// Source ingredient as stored
    pub ingredient: Ingredient,
    /// Scaling outcome for the target serving count
    pub scaled: ScaledIngredient,
}

/// Whole-recipe view for a target serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipe {
    /// Identifier of the scaled recipe
    pub recipe_id: String,
    /// Serving count the recipe is written for
    pub original_servings: f64,
    /// Requested serving count
    pub target_servings: f64,
    /// True when target and original servings differ
    pub is_scaled: bool,
    /// Scaled lines in recipe order
    pub ingredients: Vec<ScaledIngredientLine>,
}

impl ScaledRecipe {
    /// Ratio of target to original servings
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.target_servings / self.original_servings
    }

    /// Lines whose quantity the cook must adjust by hand
    pub fn manual_adjustments(&self) -> impl Iterator<Item = &ScaledIngredientLine> {
        self.ingredients
            .iter()
            .filter(|line| line.scaled.needs_manual_adjustment)
    }
}

/// Header counters of a shopping list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListSummary {
    /// Recipes the list was generated from
    pub recipe_count: usize,
    /// Lines on the list
    pub item_count: usize,
    /// Lines merged from more than one contribution
    pub shared_item_count: usize,
    /// Lines marked adjust-to-taste
    pub non_scalable_item_count: usize,
}
