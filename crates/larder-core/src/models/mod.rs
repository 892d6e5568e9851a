// ABOUTME: Data models for recipes, ingredients, and derived shopping-list entries
// ABOUTME: Re-exports Recipe Store records and engine output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fixed shopping-list categories
pub mod category;
/// Recipe Store records (`Recipe`, `Ingredient`)
pub mod recipe;
/// Engine outputs: consolidated lines, scaled quantities, summaries
pub mod shopping;

pub use category::Category;
pub use recipe::{Ingredient, Recipe};
pub use shopping::{
    CategorizedList, ConsolidatedItem, ConsolidationKey, ItemIdentity, ScaledIngredient,
    ScaledIngredientLine, ScaledRecipe, ShoppingListSummary,
};
