// ABOUTME: Integration tests for shopping-list category classification
// ABOUTME: Covers keyword tables, unit rules, rule precedence, and grouping order
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use larder::models::{Category, ConsolidatedItem, Ingredient};
use larder::shopping::{
    CategoryClassifier, ConsolidationEngine, DAIRY_AND_EGGS_KEYWORDS, MEAT_AND_SEAFOOD_KEYWORDS,
    PANTRY_UNITS, PRODUCE_KEYWORDS, SPICES_AND_SEASONINGS_KEYWORDS,
};
use proptest::prelude::*;

fn classify(name: &str, unit: &str) -> Category {
    CategoryClassifier::default().classify_parts(name, unit)
}

#[test]
fn test_every_keyword_lands_in_its_category() {
    for keyword in PRODUCE_KEYWORDS {
        assert_eq!(classify(keyword, "pc"), Category::Produce, "{keyword}");
    }
    for keyword in DAIRY_AND_EGGS_KEYWORDS {
        assert_eq!(classify(keyword, "pc"), Category::DairyAndEggs, "{keyword}");
    }
    for keyword in MEAT_AND_SEAFOOD_KEYWORDS {
        assert_eq!(classify(keyword, "pc"), Category::MeatAndSeafood, "{keyword}");
    }
    for keyword in SPICES_AND_SEASONINGS_KEYWORDS.iter().filter(|kw| **kw != "pepper") {
        assert_eq!(classify(keyword, "pc"), Category::SpicesAndSeasonings, "{keyword}");
    }
}

#[test]
fn test_keywords_match_substrings_case_insensitively() {
    assert_eq!(classify("Cherry Tomatoes", "cup"), Category::Produce);
    assert_eq!(classify("  Greek YOGURT ", "cup"), Category::DairyAndEggs);
    assert_eq!(classify("chicken thighs", "g"), Category::MeatAndSeafood);
    assert_eq!(classify("Sea Salt", "tsp"), Category::SpicesAndSeasonings);
}

#[test]
fn test_earlier_rules_win() {
    assert_eq!(classify("black pepper", "tsp"), Category::Produce);
    assert_eq!(classify("buttermilk", "cup"), Category::DairyAndEggs);
    assert_eq!(classify("garlic salt", "tsp"), Category::Produce);
}

#[test]
fn test_pantry_units() {
    for unit in PANTRY_UNITS {
        assert_eq!(classify("flour", unit), Category::Pantry, "{unit}");
    }
    assert_eq!(classify("flour", " CUP "), Category::Pantry);
    assert_eq!(classify("flour", "kg"), Category::Other);
}

#[test]
fn test_unmatched_items_fall_back_to_other() {
    assert_eq!(classify("olive oil", "ml"), Category::Other);
    assert_eq!(classify("", ""), Category::Other);
}

#[test]
fn test_classify_item_and_ingredient_agree() {
    let ingredient = Ingredient::scalable("spaghetti", 400.0, "g");
    let item = ConsolidatedItem::from_contribution(&ingredient, "r3");
    let classifier = CategoryClassifier::default();

    assert_eq!(classifier.classify(&item), Category::Pantry);
    assert_eq!(classifier.classify_ingredient(&ingredient), Category::Pantry);
}

#[test]
fn test_categorize_groups_in_canonical_order() {
    let items = ConsolidationEngine::new().consolidate(&common::sample_recipes());
    let groups = CategoryClassifier::default().categorize(&items);

    assert_eq!(groups.len(), items.len());
    let order: Vec<Category> = groups.iter().map(|(category, _)| category).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    let produce: Vec<&str> = groups
        .items(Category::Produce)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(produce, vec!["black pepper", "lettuce", "onion", "tomato"]);
    assert_eq!(groups.items(Category::SpicesAndSeasonings).len(), 2);
}

proptest! {
    #[test]
    fn prop_classification_is_total_and_stable(name in "[a-zA-Z ]{0,24}", unit in "[a-zA-Z ]{0,6}") {
        let first = classify(&name, &unit);
        prop_assert!(Category::ALL.contains(&first));
        prop_assert_eq!(first, classify(&name.to_uppercase(), &unit));
    }
}
