//! Filter on an exact diet tag.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use recipe_data::Recipe;

/// Keeps recipes carrying `spec.diet` exactly (case-sensitive).
pub struct DietFilter;

impl Filter for DietFilter {
    fn name(&self) -> &str {
        "DietFilter"
    }

    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        match spec.diet.as_deref() {
            Some(diet) => recipe.diets.iter().any(|d| d == diet),
            None => true,
        }
    }
}
