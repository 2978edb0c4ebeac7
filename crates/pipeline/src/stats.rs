//! Summary statistics over a filtered recipe set.
//!
//! Every statistic is defined on the empty set: numeric values are `0.0`
//! and the most common diet is `None`.

use recipe_data::Recipe;
use serde::Serialize;
use std::collections::HashMap;

/// Statistics shown above the recipe list.
///
/// Always derived from a recipe slice by [`aggregate`]; never edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub count: usize,
    pub average_calories: f64,
    pub median_calories: f64,
    pub average_cooking_time: f64,
    pub most_common_diet: Option<String>,
}

/// Compute all statistics for `recipes`.
pub fn aggregate(recipes: &[Recipe]) -> AggregateResult {
    let calories: Vec<f64> = recipes.iter().map(|r| r.calories).collect();
    let minutes: Vec<f64> = recipes.iter().map(|r| r.ready_in_minutes as f64).collect();
    let diets = recipes
        .iter()
        .flat_map(|r| r.diets.iter().map(String::as_str));

    AggregateResult {
        count: recipes.len(),
        average_calories: mean(&calories),
        median_calories: median(&calories),
        average_cooking_time: mean(&minutes),
        most_common_diet: most_common(diets).map(str::to_string),
    }
}

/// Arithmetic mean, `0.0` for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median, `0.0` for no values.
///
/// For an even count this is the mean of the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

/// The most frequent item, `None` for no items.
///
/// Ties go to the item that was seen first.
pub fn most_common<'a>(items: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            first_seen.push(item);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for item in first_seen {
        let count = counts[item];
        // strict > keeps the earlier item on ties
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::recipe;

    #[test]
    fn test_median() {
        assert_eq!(median(&[100.0, 200.0, 300.0]), 200.0);
        assert_eq!(median(&[100.0, 200.0]), 150.0);
        assert_eq!(median(&[300.0, 100.0, 200.0]), 200.0);
        assert_eq!(median(&[42.0]), 42.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[100.0, 200.0, 600.0]), 300.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_most_common_counts() {
        let items = ["keto", "vegan", "vegan", "paleo", "vegan", "keto"];
        assert_eq!(most_common(items), Some("vegan"));
    }

    #[test]
    fn test_most_common_tie_goes_to_first_seen() {
        let items = ["vegan", "vegan", "vegetarian", "vegetarian"];
        for _ in 0..20 {
            assert_eq!(most_common(items), Some("vegan"));
        }

        let items = ["vegetarian", "vegan", "vegan", "vegetarian"];
        assert_eq!(most_common(items), Some("vegetarian"));
    }

    #[test]
    fn test_most_common_empty() {
        assert_eq!(most_common(std::iter::empty()), None);
    }

    #[test]
    fn test_aggregate_empty_set() {
        let stats = aggregate(&[]);

        assert_eq!(stats, AggregateResult::default());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_calories, 0.0);
        assert_eq!(stats.median_calories, 0.0);
        assert_eq!(stats.average_cooking_time, 0.0);
        assert!(stats.most_common_diet.is_none());
    }

    #[test]
    fn test_aggregate() {
        let recipes = vec![
            recipe(1, "A", 100.0, 10, &["vegan"]),
            recipe(2, "B", 200.0, 20, &["vegan", "vegetarian"]),
            recipe(3, "C", 600.0, 60, &["vegetarian"]),
        ];

        let stats = aggregate(&recipes);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_calories, 300.0);
        assert_eq!(stats.median_calories, 200.0);
        assert_eq!(stats.average_cooking_time, 30.0);
        assert_eq!(stats.most_common_diet.as_deref(), Some("vegan"));
    }

    #[test]
    fn test_no_diet_tags() {
        let recipes = vec![recipe(1, "Steak", 700.0, 30, &[])];
        assert!(aggregate(&recipes).most_common_diet.is_none());
    }
}
