//! RecipeCatalog building logic.
//!
//! Turns the raw records of one fetch into a validated catalog:
//! - Validate every record in parallel (calorie extraction)
//! - Keep accepted recipes in source order
//! - Log and set aside records that fail validation

use crate::error::Result;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

impl RecipeCatalog {
    /// Build a catalog from the records of one fetch.
    ///
    /// A record that fails validation never aborts the build; it is logged
    /// at `warn` and listed in `skipped()`.
    pub fn from_api_recipes(records: Vec<ApiRecipe>) -> Self {
        let total = records.len();

        // par_iter().collect() into a Vec keeps the input order
        let validated: Vec<(RecipeId, String, Result<Recipe>)> = records
            .into_par_iter()
            .map(|api| {
                let id = api.id;
                let title = api.title.clone();
                (id, title, Recipe::try_from(api))
            })
            .collect();

        let mut catalog = RecipeCatalog::new();
        for (id, title, outcome) in validated {
            match outcome {
                Ok(recipe) => catalog.insert_recipe(recipe),
                Err(e) => {
                    warn!(recipe_id = id, title = %title, "Excluding recipe: {}", e);
                    catalog.skipped.push(SkippedRecipe {
                        id,
                        title,
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Built recipe catalog: {} accepted, {} skipped of {} records",
            catalog.len(),
            catalog.skipped.len(),
            total
        );
        catalog
    }

    /// Build a catalog from a parsed search response.
    pub fn from_response(response: SearchResponse) -> Self {
        Self::from_api_recipes(response.results)
    }

    /// Load a catalog from a search response saved on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let response = parser::parse_search_file(path)?;
        Ok(Self::from_response(response))
    }
}
