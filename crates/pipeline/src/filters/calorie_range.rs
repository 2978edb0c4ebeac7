//! Filter on the calorie range.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use recipe_data::Recipe;

/// Keeps recipes whose calories lie in `spec.calorie_range`, bounds included.
///
/// Recipes without a calorie value never reach this filter: they are
/// excluded when the catalog is built.
pub struct CalorieRangeFilter;

impl Filter for CalorieRangeFilter {
    fn name(&self) -> &str {
        "CalorieRangeFilter"
    }

    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        spec.calorie_range.contains(recipe.calories)
    }
}
