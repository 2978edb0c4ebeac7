//! The recipe source seam.

use crate::error::FetchError;
use recipe_data::ApiRecipe;

/// Anything that can deliver the raw recipe records of one fetch.
///
/// Implementations make a single attempt per call: no retry, no pagination
/// beyond their configured page size.
pub trait RecipeSource: Send + Sync {
    /// Human-readable description (for logging)
    fn describe(&self) -> String;

    /// Fetch the recipe records, in the order the source returns them.
    fn fetch_recipes(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ApiRecipe>, FetchError>> + Send;
}
