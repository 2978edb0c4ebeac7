//! Error types for the recipe-data crate.
//!
//! Every error here describes a single record or a single payload. None of
//! them is fatal to the process: the catalog builder turns per-record errors
//! into skipped entries.

use crate::types::RecipeId;
use thiserror::Error;

/// Errors that can occur while parsing and validating recipe records
#[derive(Error, Debug)]
pub enum RecipeDataError {
    /// The payload was not a valid search response
    #[error("Malformed search response: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a saved payload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A recipe has no nutrient entry with the expected name
    #[error("Recipe {recipe_id} has no \"{nutrient}\" nutrient entry")]
    MissingNutrient { recipe_id: RecipeId, nutrient: String },

    /// A field carried a value outside its domain
    #[error("Invalid value for {field} on recipe {recipe_id}: {value}")]
    InvalidValue {
        recipe_id: RecipeId,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecipeDataError>;
