// ABOUTME: Serving-size scaling for recipe ingredients with range validation
// ABOUTME: Rescales scalable quantities, flags non-scalable ones, parses and steps serving input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scaling Calculator
//!
//! Computes display quantities for the recipe-detail view while the user
//! adjusts the serving-size control.
//!
//! - Scalable ingredients are multiplied by `target / original` and rounded
//!   half up to the configured precision (two decimals by default).
//! - Non-scalable ingredients ("salt to taste") keep their stored quantity and
//!   are flagged for manual adjustment whenever the recipe itself is scaled.
//! - Target servings must lie in `(0, max_target_servings]`. Out-of-range
//!   targets are rejected, never clamped.
//!
//! Scaling to the recipe's own serving count returns every stored quantity
//! exactly, without a rounding pass.

use tracing::{debug, warn};

use crate::config::ScalingConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::{Ingredient, Recipe, ScaledIngredient, ScaledIngredientLine, ScaledRecipe};

use super::quantity::round_half_up;

/// Rescales ingredient quantities to a target serving count
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScalingCalculator {
    config: ScalingConfig,
}

impl ScalingCalculator {
    /// Create a calculator with explicit limits and precision
    #[must_use]
    pub const fn new(config: ScalingConfig) -> Self {
        Self { config }
    }

    /// Limits and precision in effect
    #[must_use]
    pub const fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Scale one ingredient from `original_servings` to `target_servings`
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidOriginalServings` if `original_servings` is not a finite positive number
    /// - `EngineError::InvalidServings` if `target_servings` is zero, negative, or NaN
    /// - `EngineError::ServingsOutOfRange` if `target_servings` exceeds the configured maximum
    pub fn scale(
        &self,
        original_servings: f64,
        target_servings: f64,
        ingredient: &Ingredient,
    ) -> EngineResult<ScaledIngredient> {
        if !is_usable_servings(original_servings) {
            warn!(
                scaling.original = original_servings,
                "Ingredient has no usable original serving count"
            );
            return Err(EngineError::InvalidOriginalServings {
                servings: original_servings,
            });
        }
        let target = self.validate_target(target_servings)?;
        Ok(self.scale_unchecked(original_servings, target, ingredient))
    }

    /// Scale every ingredient of a recipe to `target_servings`
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidRecipeServings` if the recipe's servings are not a finite positive number
    /// - the target errors of [`ScalingCalculator::scale`], checked once for the whole recipe
    pub fn scale_recipe(
        &self,
        recipe: &Recipe,
        target_servings: f64,
    ) -> EngineResult<ScaledRecipe> {
        validate_recipe_servings(&recipe.id, recipe.servings)?;
        let target = self.validate_target(target_servings)?;

        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| ScaledIngredientLine {
                ingredient: ingredient.clone(),
                scaled: self.scale_unchecked(recipe.servings, target, ingredient),
            })
            .collect();

        let is_scaled = is_rescaled(recipe.servings, target);
        debug!(
            recipe.id = %recipe.id,
            recipe.servings = recipe.servings,
            scaling.target = target,
            scaling.factor = target / recipe.servings,
            scaling.active = is_scaled,
            "Scaled recipe ingredients"
        );

        Ok(ScaledRecipe {
            recipe_id: recipe.id.clone(),
            original_servings: recipe.servings,
            target_servings: target,
            is_scaled,
            ingredients,
        })
    }

    /// Parse serving-count text typed into the serving-size input
    ///
    /// Surrounding whitespace is ignored; anything else that is not a plain
    /// decimal number is rejected rather than partially read. Typed zero or
    /// negative values count as "not a valid number", unlike stepper presses.
    ///
    /// # Errors
    ///
    /// - `EngineError::UnparsableServings` if the text is not a positive number
    /// - `EngineError::ServingsOutOfRange` if the value exceeds the configured maximum
    pub fn parse_servings(&self, input: &str) -> EngineResult<f64> {
        let parsed = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| *value > 0.0)
            .ok_or_else(|| EngineError::UnparsableServings {
                input: input.to_owned(),
            })?;
        self.validate_target(parsed)
    }

    /// Apply a +/- stepper press to the current serving count
    ///
    /// # Errors
    ///
    /// Returns the range errors of [`ScalingCalculator::validate_target`] for the stepped value;
    /// the caller keeps its current value on failure
    pub fn step_servings(&self, current: f64, delta: f64) -> EngineResult<f64> {
        self.validate_target(current + delta)
    }

    /// Check a target serving count against `(0, max_target_servings]`
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidServings` if the value is zero, negative, or NaN
    /// - `EngineError::ServingsOutOfRange` if the value exceeds the configured maximum
    pub fn validate_target(&self, target_servings: f64) -> EngineResult<f64> {
        if target_servings.is_nan() || target_servings <= 0.0 {
            warn!(
                scaling.target = target_servings,
                "Rejected target servings below minimum"
            );
            return Err(EngineError::InvalidServings {
                servings: target_servings,
            });
        }
        if target_servings > self.config.max_target_servings {
            warn!(
                scaling.target = target_servings,
                scaling.max = self.config.max_target_servings,
                "Rejected target servings above maximum"
            );
            return Err(EngineError::ServingsOutOfRange {
                servings: target_servings,
                max: self.config.max_target_servings,
            });
        }
        Ok(target_servings)
    }

    fn scale_unchecked(
        &self,
        original: f64,
        target: f64,
        ingredient: &Ingredient,
    ) -> ScaledIngredient {
        let recipe_scaled = is_rescaled(original, target);

        if !ingredient.scalable {
            return ScaledIngredient {
                display_quantity: ingredient.quantity,
                scaled: false,
                needs_manual_adjustment: recipe_scaled,
            };
        }

        if !recipe_scaled {
            return ScaledIngredient {
                display_quantity: ingredient.quantity,
                scaled: false,
                needs_manual_adjustment: false,
            };
        }

        let factor = scaling_factor(original, target);
        ScaledIngredient {
            display_quantity: round_half_up(
                ingredient.quantity * factor,
                self.config.display_decimals,
            ),
            scaled: true,
            needs_manual_adjustment: false,
        }
    }
}

/// Ratio applied to scalable quantities
#[must_use]
pub fn scaling_factor(original_servings: f64, target_servings: f64) -> f64 {
    target_servings / original_servings
}

// Exact comparison: any requested change of servings counts as scaling.
#[allow(clippy::float_cmp)]
fn is_rescaled(original: f64, target: f64) -> bool {
    original != target
}

fn is_usable_servings(servings: f64) -> bool {
    servings.is_finite() && servings > 0.0
}

fn validate_recipe_servings(recipe_id: &str, servings: f64) -> EngineResult<()> {
    if is_usable_servings(servings) {
        Ok(())
    } else {
        warn!(
            recipe.id = %recipe_id,
            recipe.servings = servings,
            "Recipe has no usable serving count"
        );
        Err(EngineError::InvalidRecipeServings {
            recipe_id: recipe_id.to_owned(),
            servings,
        })
    }
}
