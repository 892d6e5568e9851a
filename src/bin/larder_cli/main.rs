// ABOUTME: Larder CLI - command-line front end for the shopping-list engine
// ABOUTME: Builds shopping lists, scales recipes, and classifies ingredients from JSON recipe files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Shopping list for every recipe in the export, printed to stdout
//! larder shopping-list --recipes recipes.json
//!
//! # Shopping list for two recipes, written to a file
//! larder shopping-list --recipes recipes.json --recipe-id r1 --recipe-id r2 --output list.txt
//!
//! # Scale one recipe to 6 servings
//! larder scale --recipes recipes.json --recipe-id r1 --servings 6
//!
//! # Show the aisle category of an ingredient
//! larder classify --name "cherry tomatoes" --unit cup
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::config::EngineConfig;
use larder::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "larder",
    about = "Recipe scaling and shopping-list CLI",
    long_about = "Consolidates ingredients across recipes into a categorized shopping list and scales recipes to a target serving count."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a consolidated shopping list from selected recipes
    ShoppingList {
        /// Recipe Store JSON export (an array of recipes)
        #[arg(long)]
        recipes: PathBuf,

        /// Recipe to include (repeatable; all recipes when omitted)
        #[arg(long = "recipe-id")]
        recipe_ids: Vec<String>,

        /// Write the export to this file (or into this directory) instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export format: text or json
        #[arg(long, default_value = "text", value_parser = ["text", "json"], ignore_case = true)]
        format: String,
    },

    /// Scale one recipe to a target serving count
    Scale {
        /// Recipe Store JSON export (an array of recipes)
        #[arg(long)]
        recipes: PathBuf,

        /// Recipe to scale
        #[arg(long = "recipe-id")]
        recipe_id: String,

        /// Target serving count
        #[arg(long, allow_hyphen_values = true)]
        servings: String,
    },

    /// Print the shopping-list category of an ingredient
    Classify {
        /// Ingredient name
        #[arg(long)]
        name: String,

        /// Ingredient unit
        #[arg(long, default_value = "")]
        unit: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = EngineConfig::load()?;
    debug!(
        scaling.max = config.scaling.max_target_servings,
        scaling.decimals = config.scaling.display_decimals,
        "Engine configuration loaded"
    );

    match cli.command {
        Command::ShoppingList {
            recipes,
            recipe_ids,
            output,
            format,
        } => {
            commands::shopping_list::run(
                &config,
                &recipes,
                &recipe_ids,
                output.as_deref(),
                &format,
            )?;
        }
        Command::Scale {
            recipes,
            recipe_id,
            servings,
        } => {
            commands::scale::run(&config, &recipes, &recipe_id, &servings)?;
        }
        Command::Classify { name, unit } => {
            commands::classify::run(&name, &unit);
        }
    }

    Ok(())
}
