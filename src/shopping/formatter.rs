// ABOUTME: Plain-text rendering of a categorized shopping list for export and sharing
// ABOUTME: Produces the canonical SHOPPING LIST document and on-screen quantity strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping-list export rendering
//!
//! The text export is the only wire format of the engine:
//!
//! ```text
//! SHOPPING LIST
//! ========================================
//!
//! Generated from 2 recipe(s)
//!
//! PRODUCE
//! -------
//! ☐ 3 cup tomato
//!
//! ```
//!
//! Categories appear in their fixed order and empty ones are left out.
//! Every line, including the last, ends with `\n`.

use std::fmt::Write as _;
use std::iter;

use crate::constants::{
    CATEGORY_RULE, CHECKBOX, DISPLAY_DECIMALS, EXPORT_TITLE, EXPORT_TITLE_RULE,
    EXPORT_TITLE_RULE_WIDTH,
};
use crate::models::{CategorizedList, ConsolidatedItem};

use super::quantity::{render_quantity, round_half_up};

/// Output selector for a shopping-list export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Canonical checklist text (default)
    #[default]
    Text,
    /// Structured JSON of the consolidated and categorized list
    Json,
}

impl ExportFormat {
    /// Parse a format name (case-insensitive), falling back to `Text`
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// File extension used for default export names
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// Renders categorized lists as checklist text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFormatter {
    decimals: u32,
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::new(DISPLAY_DECIMALS)
    }
}

impl ListFormatter {
    /// Formatter rounding scalable quantities to `decimals` places
    #[must_use]
    pub const fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Render the full export document
    ///
    /// `source_recipe_titles` only drives the "Generated from" count.
    #[must_use]
    pub fn format<S: AsRef<str>>(
        &self,
        groups: &CategorizedList,
        source_recipe_titles: &[S],
    ) -> String {
        let mut out = String::new();

        out.push_str(EXPORT_TITLE);
        out.push('\n');
        out.extend(iter::repeat_n(EXPORT_TITLE_RULE, EXPORT_TITLE_RULE_WIDTH));
        out.push_str("\n\n");
        let _ = writeln!(
            out,
            "Generated from {} recipe(s)",
            source_recipe_titles.len()
        );
        out.push('\n');

        for (category, items) in groups.iter() {
            let heading = category.export_heading();
            let rule_width = heading.chars().count();
            out.push_str(&heading);
            out.push('\n');
            out.extend(iter::repeat_n(CATEGORY_RULE, rule_width));
            out.push('\n');

            for item in items {
                let _ = writeln!(
                    out,
                    "{CHECKBOX} {} {} {}",
                    self.format_quantity(item),
                    item.unit,
                    item.name
                );
            }
            out.push('\n');
        }

        out
    }

    /// Quantity as shown on a list line
    ///
    /// Scalable lines are rounded half up; non-scalable lines show the stored value.
    #[must_use]
    pub fn format_quantity(&self, item: &ConsolidatedItem) -> String {
        if item.scalable {
            render_quantity(round_half_up(item.quantity, self.decimals))
        } else {
            render_quantity(item.quantity)
        }
    }
}
