//! Filter on an exact cuisine tag.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use recipe_data::Recipe;

/// Keeps recipes carrying `spec.cuisine` exactly (case-sensitive).
pub struct CuisineFilter;

impl Filter for CuisineFilter {
    fn name(&self) -> &str {
        "CuisineFilter"
    }

    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        match spec.cuisine.as_deref() {
            Some(cuisine) => recipe.cuisines.iter().any(|c| c == cuisine),
            None => true,
        }
    }
}
