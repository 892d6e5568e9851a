// ABOUTME: Scale command for the larder CLI
// ABOUTME: Shows one recipe's ingredient quantities at a target serving count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Error, Result};
use larder::config::EngineConfig;
use larder::shopping::ScalingCalculator;

use crate::helpers::display::display_scaled_recipe;
use crate::helpers::recipes_file::{find_recipe, load_recipes};

/// Scale a recipe from the recipe file to `servings`
pub fn run(
    config: &EngineConfig,
    recipes_path: &Path,
    recipe_id: &str,
    servings: &str,
) -> Result<()> {
    let recipe = find_recipe(load_recipes(recipes_path)?, recipe_id)?;
    let calculator = ScalingCalculator::new(config.scaling);

    let target = calculator
        .parse_servings(servings)
        .map_err(|e| {
            let message = e.user_message();
            Error::new(e).context(message)
        })?;
    let scaled = calculator.scale_recipe(&recipe, target)?;

    display_scaled_recipe(&recipe.title, &scaled);
    Ok(())
}
