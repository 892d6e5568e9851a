// ABOUTME: Recipe Store JSON export loading for the larder CLI
// ABOUTME: Reads an array of recipes from disk and selects recipes by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use larder::models::Recipe;
use tracing::info;

/// Load every recipe from a Recipe Store JSON export
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;

    info!(
        recipes.count = recipes.len(),
        recipes.path = %path.display(),
        "Loaded recipe file"
    );
    Ok(recipes)
}

/// Pick recipes by id in the requested order; an empty selection keeps all in file order
pub fn select_recipes(recipes: Vec<Recipe>, ids: &[String]) -> Result<Vec<Recipe>> {
    if ids.is_empty() {
        return Ok(recipes);
    }

    let mut selected = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(recipe) = recipes.iter().find(|recipe| &recipe.id == id) else {
            bail!("Unknown recipe id: {id}");
        };
        selected.push(recipe.clone());
    }
    Ok(selected)
}

/// Find a single recipe by id
pub fn find_recipe(recipes: Vec<Recipe>, id: &str) -> Result<Recipe> {
    recipes
        .into_iter()
        .find(|recipe| recipe.id == id)
        .with_context(|| format!("Unknown recipe id: {id}"))
}
