//! Filter on the cooking-time bucket.

use crate::filter_spec::FilterSpec;
use crate::traits::Filter;
use recipe_data::Recipe;

/// Keeps recipes whose `ready_in_minutes` lies in `spec.cooking_time`.
///
/// Passes everything when no bucket is set.
pub struct CookingTimeFilter;

impl Filter for CookingTimeFilter {
    fn name(&self) -> &str {
        "CookingTimeFilter"
    }

    fn matches(&self, recipe: &Recipe, spec: &FilterSpec) -> bool {
        spec.cooking_time
            .is_none_or(|bucket| bucket.contains(recipe.ready_in_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, recipe};

    #[test]
    fn test_bucket_bounds_are_inclusive() {
        let recipes = vec![
            recipe(1, "15 min", 200.0, 15, &[]),
            recipe(2, "16 min", 200.0, 16, &[]),
            recipe(3, "30 min", 200.0, 30, &[]),
            recipe(4, "31 min", 200.0, 31, &[]),
        ];

        let spec = FilterSpec::new().with_cooking_time("16-30");
        let filtered = CookingTimeFilter.apply(recipes, &spec);

        assert_eq!(ids(&filtered), vec![2, 3]);
    }

    #[test]
    fn test_no_bucket_matches_everything() {
        let recipes = vec![
            recipe(1, "Quick", 200.0, 0, &[]),
            recipe(2, "Slow", 200.0, 600, &[]),
        ];

        assert_eq!(CookingTimeFilter.apply(recipes.clone(), &FilterSpec::default()).len(), 2);

        // Malformed bucket behaves like no bucket
        let spec = FilterSpec::new().with_cooking_time("forever");
        assert_eq!(CookingTimeFilter.apply(recipes, &spec).len(), 2);
    }
}
