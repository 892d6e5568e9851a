// ABOUTME: Integration tests for the plain-text shopping-list export
// ABOUTME: Verifies the exact export document, quantity rendering, and JSON rendering
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use larder::models::{Category, ConsolidatedItem, Ingredient, Recipe};
use larder::shopping::{build_shopping_list, ExportFormat, ListFormatter, ShoppingList};

const SOUP_AND_SALAD_EXPORT: &str = "\
SHOPPING LIST
========================================

Generated from 2 recipe(s)

PRODUCE
-------
☐ 1 head lettuce
☐ 1 pc onion
☐ 3 cup tomato

DAIRY & EGGS
------------
☐ 2 tbsp butter

PANTRY
------
☐ 2 tbsp olive oil

SPICES & SEASONINGS
-------------------
☐ 1 tsp salt
☐ 0.5 tsp salt

";

#[test]
fn test_export_document_is_exact() {
    let export = build_shopping_list(&[common::tomato_soup(), common::garden_salad()]);
    assert_eq!(export, SOUP_AND_SALAD_EXPORT);
}

#[test]
fn test_export_for_empty_selection() {
    let export = build_shopping_list(&[]);
    assert_eq!(
        export,
        "SHOPPING LIST\n========================================\n\nGenerated from 0 recipe(s)\n\n"
    );
}

#[test]
fn test_export_counts_titles_not_ingredients() {
    let empty = Recipe::new("r9", "Water", 1.0);
    let export = build_shopping_list(&[empty.clone(), empty]);

    assert!(export.contains("Generated from 2 recipe(s)\n"));
    assert!(!export.contains('☐'));
}

#[test]
fn test_scalable_sum_is_rounded_on_export() {
    let rice = Ingredient::scalable("rice", 0.333, "cup");
    let a = Recipe::new("a", "A", 2.0).with_ingredient(rice.clone());
    let b = Recipe::new("b", "B", 2.0).with_ingredient(rice);
    let export = build_shopping_list(&[a, b]);

    assert!(export.contains("☐ 0.67 cup rice\n"));
}

#[test]
fn test_format_quantity_has_no_trailing_zeros() {
    let formatter = ListFormatter::default();
    let line = |quantity: f64, scalable: bool| {
        let ingredient = Ingredient::new("flour", quantity, "cup", scalable);
        ConsolidatedItem::from_contribution(&ingredient, "r1")
    };

    assert_eq!(formatter.format_quantity(&line(3.0, true)), "3");
    assert_eq!(formatter.format_quantity(&line(0.5, true)), "0.5");
    assert_eq!(formatter.format_quantity(&line(1.25, true)), "1.25");
    assert_eq!(formatter.format_quantity(&line(1.005_000_1, true)), "1.01");
    assert_eq!(formatter.format_quantity(&line(1.005_000_1, false)), "1.0050001");
}

#[test]
fn test_meat_heading_rule_width() {
    let export = build_shopping_list(&[common::carbonara()]);
    assert!(export.contains("MEAT & SEAFOOD\n--------------\n☐ 150 g pancetta\n\n"));
}

#[test]
fn test_json_rendering_carries_summary_and_groups() {
    let list = ShoppingList::from_recipes(&common::sample_recipes());
    let rendered = list
        .render(ExportFormat::Json, &ListFormatter::default())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["summary"]["recipeCount"], 3);
    assert_eq!(value["sourceRecipeTitles"][0], "Tomato Soup");
    assert!(value["categorized"]["groups"]["produce"].is_array());

    let round_trip: ShoppingList = serde_json::from_str(&rendered).unwrap();
    assert_eq!(round_trip.categorized.items(Category::Produce).len(), 4);
}
