// ABOUTME: Shopping-list command for the larder CLI
// ABOUTME: Consolidates selected recipes and prints or writes the export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use larder::config::EngineConfig;
use larder::constants::EXPORT_FILE_NAME;
use larder::shopping::{ExportFormat, ListFormatter, ShoppingList};
use tracing::info;

use crate::helpers::display::display_export_written;
use crate::helpers::recipes_file::{load_recipes, select_recipes};

/// Build the shopping list for the selected recipes
pub fn run(
    config: &EngineConfig,
    recipes_path: &Path,
    recipe_ids: &[String],
    output: Option<&Path>,
    format: &str,
) -> Result<()> {
    let recipes = select_recipes(load_recipes(recipes_path)?, recipe_ids)?;
    let format = ExportFormat::from_str_param(format);

    let list = ShoppingList::from_recipes(&recipes);
    info!(
        list.recipes = list.summary.recipe_count,
        list.items = list.summary.item_count,
        list.shared = list.summary.shared_item_count,
        list.non_scalable = list.summary.non_scalable_item_count,
        "Built shopping list"
    );

    let formatter = ListFormatter::new(config.scaling.display_decimals);
    let rendered = list
        .render(format, &formatter)
        .context("Failed to render shopping list")?;

    match output {
        Some(target) => {
            let path = resolve_output_path(target, format);
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            display_export_written(&path.display().to_string(), &list.summary);
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Directories receive the default export file name
fn resolve_output_path(target: &Path, format: ExportFormat) -> PathBuf {
    if target.is_dir() {
        target
            .join(EXPORT_FILE_NAME)
            .with_extension(format.extension())
    } else {
        target.to_path_buf()
    }
}
