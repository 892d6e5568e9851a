// ABOUTME: Canonical plain-text shopping-list export layout constants
// ABOUTME: Title, rule width, checkbox glyph, and default export file name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// First line of every export
pub const EXPORT_TITLE: &str = "SHOPPING LIST";

/// Character repeated under the export title
pub const EXPORT_TITLE_RULE: char = '=';

/// Width of the rule under the export title
pub const EXPORT_TITLE_RULE_WIDTH: usize = 40;

/// Character repeated under each category heading
pub const CATEGORY_RULE: char = '-';

/// Unchecked box printed in front of every item
pub const CHECKBOX: char = '☐';

/// File name the Presentation Layer offers when saving an export
pub const EXPORT_FILE_NAME: &str = "shopping-list.txt";
