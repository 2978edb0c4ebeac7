//! Parsing of recipe search payloads.
//!
//! - `parse_search_response`: JSON text into a `SearchResponse`
//! - `parse_search_file`: same, from a saved payload on disk
//! - `TryFrom<ApiRecipe> for Recipe`: wire record into validated domain record

use crate::error::{RecipeDataError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

/// Parse the body of a recipe search response.
pub fn parse_search_response(json: &str) -> Result<SearchResponse> {
    let response: SearchResponse = serde_json::from_str(json)?;
    Ok(response)
}

/// Parse a search response previously saved to disk.
pub fn parse_search_file(path: &Path) -> Result<SearchResponse> {
    let content = fs::read_to_string(path)?;
    parse_search_response(&content)
}

/// Extract the calorie amount of a wire record.
///
/// The nutrient must be present and hold a finite, non-negative amount.
pub fn extract_calories(recipe: &ApiRecipe) -> Result<f64> {
    let amount = recipe.nutrient_amount(CALORIES_NUTRIENT).ok_or_else(|| {
        RecipeDataError::MissingNutrient {
            recipe_id: recipe.id,
            nutrient: CALORIES_NUTRIENT.to_string(),
        }
    })?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(RecipeDataError::InvalidValue {
            recipe_id: recipe.id,
            field: "calories".to_string(),
            value: amount.to_string(),
        });
    }
    Ok(amount)
}

impl TryFrom<ApiRecipe> for Recipe {
    type Error = RecipeDataError;

    fn try_from(api: ApiRecipe) -> Result<Self> {
        let calories = extract_calories(&api)?;
        Ok(Recipe {
            id: api.id,
            title: api.title,
            image: api.image,
            ready_in_minutes: api.ready_in_minutes,
            diets: api.diets,
            cuisines: api.cuisines,
            calories,
        })
    }
}
