// ABOUTME: Shopping-list consolidation merging ingredients across selected recipes
// ABOUTME: Sums scalable name+unit collisions and keeps non-scalable collisions as separate lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Consolidation Engine
//!
//! Walks recipes in input order and their ingredients in list order, keyed by
//! normalized name + unit:
//!
//! 1. The first contribution for a key opens the keyed line for that key.
//! 2. A later contribution is summed into the keyed line when both are scalable.
//! 3. Any other collision opens a pinned line holding only that contribution,
//!    so quantities such as "salt, to taste" are never added together.
//!
//! Quantities are summed raw; rounding happens only when a line is displayed
//! or exported. The result is stably sorted by name with the Unicode root
//! collation at secondary strength: case is ignored, accents are not, and
//! "édamame" sorts next to "eggplant". Lines whose names collate equal keep
//! the order in which they were first opened.

use std::cmp::Ordering;
use std::collections::HashMap;

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::{debug, warn};

use crate::models::{ConsolidatedItem, ConsolidationKey, Recipe, ShoppingListSummary};

/// What the keyed line for a consolidation key can still absorb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyedLine {
    /// Scalable line at this index; later scalable contributions add to it
    Accumulator(usize),
    /// Non-scalable line; every later contribution for the key is pinned
    Anchored,
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(error) => {
            warn!(
                error = ?error,
                "Unicode collator unavailable, ordering names by lowercase code point"
            );
            None
        }
    }
}

/// Merges ingredients from multiple recipes into one deduplicated list
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolidationEngine;

impl ConsolidationEngine {
    /// Create a consolidation engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Merge the ingredients of `recipes` into a sorted shopping list
    ///
    /// An empty recipe set yields an empty list.
    #[must_use]
    pub fn consolidate(&self, recipes: &[Recipe]) -> Vec<ConsolidatedItem> {
        let mut lines: Vec<ConsolidatedItem> = Vec::new();
        let mut keyed: HashMap<ConsolidationKey, KeyedLine> = HashMap::new();
        let mut merged = 0_usize;
        let mut pinned = 0_usize;

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                let key = ConsolidationKey::for_ingredient(ingredient);

                match keyed.get(&key).copied() {
                    None => {
                        let slot = if ingredient.scalable {
                            KeyedLine::Accumulator(lines.len())
                        } else {
                            KeyedLine::Anchored
                        };
                        keyed.insert(key, slot);
                        lines.push(ConsolidatedItem::from_contribution(ingredient, &recipe.id));
                    }
                    Some(KeyedLine::Accumulator(index)) if ingredient.scalable => {
                        if let Some(line) = lines.get_mut(index) {
                            line.quantity += ingredient.quantity;
                            line.recipe_ids.push(recipe.id.clone());
                            merged += 1;
                        }
                    }
                    Some(_) => {
                        lines.push(ConsolidatedItem::from_contribution(ingredient, &recipe.id));
                        pinned += 1;
                    }
                }
            }
        }

        NAME_COLLATOR.with(|collator| {
            lines.sort_by(|a, b| compare_names(collator.as_ref(), a, b));
        });

        debug!(
            consolidation.recipes = recipes.len(),
            consolidation.lines = lines.len(),
            consolidation.merged = merged,
            consolidation.pinned = pinned,
            "Consolidated shopping list"
        );

        lines
    }

    /// Header counters for a list produced from `recipes`
    #[must_use]
    pub fn summarize(
        &self,
        recipes: &[Recipe],
        items: &[ConsolidatedItem],
    ) -> ShoppingListSummary {
        ShoppingListSummary {
            recipe_count: recipes.len(),
            item_count: items.len(),
            shared_item_count: items.iter().filter(|item| item.is_shared()).count(),
            non_scalable_item_count: items
                .iter()
                .filter(|item| item.needs_taste_adjustment())
                .count(),
        }
    }
}

/// Name order for the final list; `sort_by` keeps ties in first-seen order
fn compare_names(
    collator: Option<&Collator>,
    a: &ConsolidatedItem,
    b: &ConsolidatedItem,
) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a.name.trim(), b.name.trim()),
        None => a.normalized_name().cmp(&b.normalized_name()),
    }
}
