// ABOUTME: Grocery-aisle categorization of consolidated shopping-list lines
// ABOUTME: Applies an ordered keyword/unit rule table where the first matching rule wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Category Classifier
//!
//! Rules are checked in table order and the first match decides the category.
//! Name rules match when the trimmed, lowercased name contains any keyword as a
//! substring; the unit rule matches on the trimmed, lowercased unit exactly.
//! The final rule always matches, so every line gets a category.
//!
//! Order matters: "pepper" is both a produce and a spice keyword, and
//! "bell pepper" and "black pepper" both land in Produce.

use tracing::trace;

use crate::models::{CategorizedList, Category, ConsolidatedItem, Ingredient};

/// Name keywords filed under Produce
pub const PRODUCE_KEYWORDS: &[&str] = &[
    "tomato", "lettuce", "onion", "garlic", "pepper", "cucumber", "banana", "apple", "carrot",
    "broccoli",
];

/// Name keywords filed under Dairy & Eggs
pub const DAIRY_AND_EGGS_KEYWORDS: &[&str] =
    &["milk", "cheese", "butter", "cream", "yogurt", "egg"];

/// Name keywords filed under Meat & Seafood
pub const MEAT_AND_SEAFOOD_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "shrimp", "turkey", "pancetta",
];

/// Name keywords filed under Spices & Seasonings
pub const SPICES_AND_SEASONINGS_KEYWORDS: &[&str] = &[
    "salt", "pepper", "oregano", "basil", "cumin", "paprika", "vanilla", "cinnamon", "ginger",
];

/// Units that file an otherwise unmatched line under Pantry
pub const PANTRY_UNITS: &[&str] = &["g", "cup", "tbsp"];

/// Condition half of a classification rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Normalized name contains any of these keywords
    NameContainsAny(&'static [&'static str]),
    /// Normalized unit equals one of these units
    UnitIsAny(&'static [&'static str]),
    /// Matches every line
    Always,
}

impl Matcher {
    /// Check a normalized name and unit against this matcher
    #[must_use]
    pub fn matches(&self, name: &str, unit: &str) -> bool {
        match self {
            Self::NameContainsAny(keywords) => keywords.iter().any(|kw| name.contains(kw)),
            Self::UnitIsAny(units) => units.contains(&unit),
            Self::Always => true,
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Category assigned when the matcher fires
    pub category: Category,
    /// Condition checked against the line
    pub matcher: Matcher,
}

/// Default rule table, checked top to bottom
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: Category::Produce,
        matcher: Matcher::NameContainsAny(PRODUCE_KEYWORDS),
    },
    ClassificationRule {
        category: Category::DairyAndEggs,
        matcher: Matcher::NameContainsAny(DAIRY_AND_EGGS_KEYWORDS),
    },
    ClassificationRule {
        category: Category::MeatAndSeafood,
        matcher: Matcher::NameContainsAny(MEAT_AND_SEAFOOD_KEYWORDS),
    },
    ClassificationRule {
        category: Category::SpicesAndSeasonings,
        matcher: Matcher::NameContainsAny(SPICES_AND_SEASONINGS_KEYWORDS),
    },
    ClassificationRule {
        category: Category::Pantry,
        matcher: Matcher::UnitIsAny(PANTRY_UNITS),
    },
    ClassificationRule {
        category: Category::Other,
        matcher: Matcher::Always,
    },
];

/// Assigns every shopping-list line to exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryClassifier {
    rules: &'static [ClassificationRule],
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::with_rules(CLASSIFICATION_RULES)
    }
}

impl CategoryClassifier {
    /// Classifier over a custom rule table
    ///
    /// A table without a trailing `Matcher::Always` rule falls back to
    /// `Category::Other` for unmatched lines.
    #[must_use]
    pub const fn with_rules(rules: &'static [ClassificationRule]) -> Self {
        Self { rules }
    }

    /// Rule table in use
    #[must_use]
    pub const fn rules(&self) -> &'static [ClassificationRule] {
        self.rules
    }

    /// Category of a consolidated line
    #[must_use]
    pub fn classify(&self, item: &ConsolidatedItem) -> Category {
        self.classify_parts(&item.name, &item.unit)
    }

    /// Category of a single recipe ingredient
    #[must_use]
    pub fn classify_ingredient(&self, ingredient: &Ingredient) -> Category {
        self.classify_parts(&ingredient.name, &ingredient.unit)
    }

    /// Category for a raw name and unit
    #[must_use]
    pub fn classify_parts(&self, name: &str, unit: &str) -> Category {
        let name = name.trim().to_lowercase();
        let unit = unit.trim().to_lowercase();

        let category = self
            .rules
            .iter()
            .find(|rule| rule.matcher.matches(&name, &unit))
            .map_or(Category::Other, |rule| rule.category);

        trace!(item.name = %name, item.unit = %unit, %category, "Classified item");
        category
    }

    /// Group `items` by category, keeping their order inside each group
    #[must_use]
    pub fn categorize(&self, items: &[ConsolidatedItem]) -> CategorizedList {
        let mut list = CategorizedList::new();
        for item in items {
            list.push(self.classify(item), item.clone());
        }
        list
    }
}
