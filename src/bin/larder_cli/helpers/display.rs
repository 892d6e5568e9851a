// ABOUTME: Output formatting helpers for the larder CLI
// ABOUTME: Renders scaled recipes and classification results for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder::models::{Category, ScaledRecipe, ShoppingListSummary};
use larder::shopping::render_quantity;

/// Hint shown next to ingredients that do not follow the serving count
pub const MANUAL_ADJUSTMENT_HINT: &str = "Non-scalable - adjust to taste";

/// Display a recipe scaled to the requested serving count
pub fn display_scaled_recipe(title: &str, scaled: &ScaledRecipe) {
    let servings = render_quantity(scaled.target_servings);
    if scaled.is_scaled {
        println!(
            "{title} (scaled from {} to {servings} servings)",
            render_quantity(scaled.original_servings)
        );
    } else {
        println!("{title} ({servings} servings)");
    }
    println!("{}", "=".repeat(40));

    for line in &scaled.ingredients {
        let quantity = render_quantity(line.scaled.display_quantity);
        let ingredient = &line.ingredient;
        if line.scaled.needs_manual_adjustment {
            println!(
                "- {quantity} {} {} ({MANUAL_ADJUSTMENT_HINT})",
                ingredient.unit, ingredient.name
            );
        } else {
            println!("- {quantity} {} {}", ingredient.unit, ingredient.name);
        }
    }
}

/// Display the category of a classified ingredient
pub fn display_category(name: &str, category: Category) {
    println!("{name}: {category}");
}

/// One-line summary of a written export
pub fn display_export_written(path: &str, summary: &ShoppingListSummary) {
    println!(
        "Wrote {} item(s) from {} recipe(s) to {path}",
        summary.item_count, summary.recipe_count
    );
}
