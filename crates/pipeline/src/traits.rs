//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each predicate be
//! composed into a FilterPipeline and tested on its own.

use crate::filter_spec::FilterSpec;
use recipe_data::Recipe;

/// A single predicate over recipes.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - `matches` is the predicate; `apply` keeps matching recipes in order
/// - A filter whose setting is unset in the `FilterSpec` must match everything
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `recipe` passes this filter under `spec`.
    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool;

    /// Apply this filter to a set of recipes, preserving their order.
    fn apply(&self, recipes: Vec<Recipe>, spec: &FilterSpec) -> Vec<Recipe> {
        recipes
            .into_iter()
            .filter(|recipe| self.matches(recipe, spec))
            .collect()
    }
}
