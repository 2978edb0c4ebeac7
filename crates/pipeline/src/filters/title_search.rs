//! Filter on a case-insensitive title substring.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use recipe_data::Recipe;

/// Keeps recipes whose title contains `spec.search_term`, ignoring case.
///
/// An empty search term matches every recipe.
pub struct TitleSearchFilter;

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        if spec.search_term.is_empty() {
            return true;
        }
        recipe
            .title
            .to_lowercase()
            .contains(&spec.search_term.to_lowercase())
    }
}
