//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern. A recipe survives the
//! pipeline only if every filter matches it.

use crate::filter_spec::FilterSpec;
use crate::filters::{
    CalorieRangeFilter, CookingTimeFilter, CuisineFilter, DietFilter, TitleSearchFilter,
};
use crate::traits::Filter;
use recipe_data::Recipe;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleSearchFilter)
///     .add_filter(DietFilter);
///
/// let filtered = pipeline.apply(recipes, &spec);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The five dashboard filters in their canonical order.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TitleSearchFilter)
            .add_filter(DietFilter)
            .add_filter(CuisineFilter)
            .add_filter(CalorieRangeFilter)
            .add_filter(CookingTimeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Whether a single recipe passes every filter.
    pub fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        self.filters.iter().all(|f| f.matches(recipe, spec))
    }

    /// Apply all filters in sequence to the recipes.
    ///
    /// Each stage logs its name and input/output counts at debug level.
    pub fn apply(&self, recipes: Vec<Recipe>, spec: &FilterSpec) -> Vec<Recipe> {
        let mut current = recipes;
        for filter in &self.filters {
            let input = current.len();
            current = filter.apply(current, spec);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Filter a recipe set with the standard pipeline.
pub fn filter(recipes: &[Recipe], spec: &FilterSpec) -> Vec<Recipe> {
    FilterPipeline::standard().apply(recipes.to_vec(), spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, recipe};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let recipes = vec![
            recipe(1, "Pasta", 5000.0, 20, &[]),
            recipe(2, "Salad", 150.0, 10, &[]),
        ];

        let filtered = pipeline.apply(recipes, &FilterSpec::new().with_search("nothing"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(DietFilter);
        let recipes = vec![
            recipe(1, "Pasta", 400.0, 20, &["vegetarian"]),
            recipe(2, "Steak", 700.0, 30, &[]),
        ];

        let filtered = pipeline.apply(recipes, &FilterSpec::new().with_diet("vegetarian"));
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec![
                "TitleSearchFilter",
                "DietFilter",
                "CuisineFilter",
                "CalorieRangeFilter",
                "CookingTimeFilter",
            ]
        );
    }

    #[test]
    fn test_filters_combine_with_and() {
        let recipes = vec![
            recipe(1, "Vegan Chili", 450.0, 40, &["vegan"]),
            recipe(2, "Vegan Wrap", 350.0, 15, &["vegan"]),
            recipe(3, "Chicken Wrap", 380.0, 15, &[]),
            recipe(4, "Vegan Cake", 900.0, 15, &["vegan"]),
        ];

        let spec = FilterSpec::new()
            .with_search("wrap")
            .with_diet("vegan")
            .with_calorie_range(0.0, 500.0)
            .with_cooking_time("0-15");

        let pipeline = FilterPipeline::standard();
        let filtered = pipeline.apply(recipes.clone(), &spec);
        assert_eq!(ids(&filtered), vec![2]);

        // Same answer from the single-recipe predicate
        let matching: Vec<u64> = recipes
            .iter()
            .filter(|r| pipeline.matches(r, &spec))
            .map(|r| r.id)
            .collect();
        assert_eq!(matching, vec![2]);
    }

    #[test]
    fn test_filter_preserves_input() {
        let recipes = vec![recipe(1, "Pasta", 400.0, 20, &[])];
        let filtered = filter(&recipes, &FilterSpec::new().with_search("salad"));

        assert!(filtered.is_empty());
        assert_eq!(recipes.len(), 1);
    }
}
