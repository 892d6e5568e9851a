// ABOUTME: Fixed shopping-list category set with display and export labels
// ABOUTME: Declaration order is the canonical category order used for grouping and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Shopping-list grouping assigned to every consolidated item
///
/// The set is closed. `Ord` follows declaration order, which is also the order
/// categories appear in on screen and in the plain-text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vegetables and fruit
    Produce,
    /// Milk, cheese, butter, cream, yogurt, eggs
    DairyAndEggs,
    /// Meat, poultry, fish, and shellfish
    MeatAndSeafood,
    /// Dry goods measured by weight or volume
    Pantry,
    /// Salt, dried herbs, ground spices, extracts
    SpicesAndSeasonings,
    /// Anything no other rule claims
    Other,
}

impl Category {
    /// Every category in canonical order
    pub const ALL: [Self; 6] = [
        Self::Produce,
        Self::DairyAndEggs,
        Self::MeatAndSeafood,
        Self::Pantry,
        Self::SpicesAndSeasonings,
        Self::Other,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::DairyAndEggs => "Dairy & Eggs",
            Self::MeatAndSeafood => "Meat & Seafood",
            Self::Pantry => "Pantry",
            Self::SpicesAndSeasonings => "Spices & Seasonings",
            Self::Other => "Other",
        }
    }

    /// Uppercase label used as a heading in the plain-text export
    #[must_use]
    pub fn export_heading(&self) -> String {
        self.display_name().to_uppercase()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}
