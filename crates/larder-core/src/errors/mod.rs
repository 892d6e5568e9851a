// ABOUTME: Unified error taxonomy for the shopping-list engine
// ABOUTME: Defines EngineError variants, stable error codes, and inline validation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Error Handling
//!
//! Every engine operation is pure and deterministic, so errors are never retried:
//! the same input always produces the same failure. Failures are returned as
//! explicit `Result` values so callers can show inline validation messages.
//!
//! Consolidating an empty recipe set is not an error and has no variant here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes reported alongside engine failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Target serving count is zero, negative, or not a number
    InvalidServings,
    /// Target serving count exceeds the accepted maximum
    ServingsOutOfRange,
    /// Recipe supplied by the Recipe Store has no usable serving count
    InvalidRecipeServings,
    /// Serving input text could not be read as a number
    UnparsableServings,
}

impl ErrorCode {
    /// Get a short description of this error class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidServings => "The requested serving count must be greater than zero",
            Self::ServingsOutOfRange => "The requested serving count is above the allowed maximum",
            Self::InvalidRecipeServings => "The recipe does not declare a positive serving count",
            Self::UnparsableServings => "The serving count is not a number",
        }
    }
}

/// Errors returned by the scaling calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Target servings at or below zero (NaN included)
    #[error("Invalid servings: {servings} (must be greater than 0)")]
    InvalidServings {
        /// Rejected target serving count
        servings: f64,
    },

    /// Target servings above the configured maximum
    #[error("Servings out of range: {servings} (maximum is {max})")]
    ServingsOutOfRange {
        /// Rejected target serving count
        servings: f64,
        /// Largest accepted target serving count
        max: f64,
    },

    /// Recipe servings are not a finite positive number
    #[error("Recipe {recipe_id} has invalid servings: {servings}")]
    InvalidRecipeServings {
        /// Identifier of the offending recipe
        recipe_id: String,
        /// Serving count declared by the recipe
        servings: f64,
    },

    /// Original servings passed with a bare ingredient are not a finite positive number
    #[error("Invalid original servings: {servings}")]
    InvalidOriginalServings {
        /// Serving count the ingredient quantity was written for
        servings: f64,
    },

    /// Serving input that does not parse as a number
    #[error("Unparsable servings input: '{input}'")]
    UnparsableServings {
        /// Raw text supplied by the caller
        input: String,
    },
}

impl EngineError {
    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidServings { .. } => ErrorCode::InvalidServings,
            Self::ServingsOutOfRange { .. } => ErrorCode::ServingsOutOfRange,
            Self::InvalidRecipeServings { .. } | Self::InvalidOriginalServings { .. } => {
                ErrorCode::InvalidRecipeServings
            }
            Self::UnparsableServings { .. } => ErrorCode::UnparsableServings,
        }
    }

    /// Inline validation text shown next to the serving-size control
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidServings { .. } => "Servings must be greater than 0".to_owned(),
            Self::ServingsOutOfRange { max, .. } => format!("Servings cannot exceed {max}"),
            Self::InvalidRecipeServings { .. } | Self::InvalidOriginalServings { .. } => {
                "This recipe has no serving count to scale from".to_owned()
            }
            Self::UnparsableServings { .. } => "Please enter a valid number".to_owned(),
        }
    }
}

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_variants() {
        assert_eq!(
            EngineError::InvalidServings { servings: 0.0 }.code(),
            ErrorCode::InvalidServings
        );
        assert_eq!(
            EngineError::ServingsOutOfRange {
                servings: 150.0,
                max: 100.0
            }
            .code(),
            ErrorCode::ServingsOutOfRange
        );
        assert_eq!(
            EngineError::UnparsableServings {
                input: "abc".to_owned()
            }
            .code(),
            ErrorCode::UnparsableServings
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            EngineError::InvalidServings { servings: -1.0 }.user_message(),
            "Servings must be greater than 0"
        );
        assert_eq!(
            EngineError::ServingsOutOfRange {
                servings: 101.0,
                max: 100.0
            }
            .user_message(),
            "Servings cannot exceed 100"
        );
        assert_eq!(
            EngineError::UnparsableServings {
                input: String::new()
            }
            .user_message(),
            "Please enter a valid number"
        );
    }

    #[test]
    fn test_bare_ingredient_servings_message_has_no_recipe_id() {
        let err = EngineError::InvalidOriginalServings { servings: 0.0 };
        assert_eq!(err.to_string(), "Invalid original servings: 0");
        assert_eq!(err.code(), ErrorCode::InvalidRecipeServings);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ServingsOutOfRange).unwrap();
        assert_eq!(json, "\"SERVINGS_OUT_OF_RANGE\"");
    }
}
