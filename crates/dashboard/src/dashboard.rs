//! # Recipe Dashboard
//!
//! Coordinates the whole flow behind the dashboard:
//! 1. Fetch the recipe records once from a `RecipeSource`
//! 2. Validate them into a `RecipeCatalog`
//! 3. For each filter spec: run the filter pipeline and aggregate statistics
//!
//! Step 3 is memoized on the filter spec. The catalog never changes once
//! loaded, so an unchanged spec returns the previous view.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use pipeline::{AggregateResult, FilterPipeline, FilterSpec, aggregate};
use recipe_data::{Recipe, RecipeCatalog};
use sources::RecipeSource;

/// Where the dashboard is in its lifecycle.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// No fetch has completed yet
    Loading,
    /// Recipes are available
    Ready(Arc<RecipeCatalog>),
    /// The fetch failed; holds the message to show the user
    Failed(String),
}

/// What the presentation layer renders for one filter spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub recipes: Vec<Recipe>,
    pub stats: AggregateResult,
}

/// Filter `recipes` and compute statistics over the result.
pub fn compute_view(
    pipeline: &FilterPipeline,
    recipes: &[Recipe],
    spec: &FilterSpec,
) -> DashboardView {
    let filtered = pipeline.apply(recipes.to_vec(), spec);
    let stats = aggregate(&filtered);
    DashboardView {
        recipes: filtered,
        stats,
    }
}

/// Main dashboard state: the loaded catalog plus the memoized view.
pub struct RecipeDashboard {
    state: LoadState,
    pipeline: Arc<FilterPipeline>,
    last_view: Option<(FilterSpec, DashboardView)>,
    recomputations: usize,
}

impl RecipeDashboard {
    /// A dashboard that has not loaded anything yet
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            pipeline: Arc::new(FilterPipeline::standard()),
            last_view: None,
            recomputations: 0,
        }
    }

    /// A dashboard over an already built catalog
    pub fn from_catalog(catalog: RecipeCatalog) -> Self {
        let mut dashboard = Self::new();
        dashboard.state = LoadState::Ready(Arc::new(catalog));
        dashboard
    }

    /// Fetch once from `source` and build the dashboard.
    ///
    /// Never fails: a fetch error becomes `LoadState::Failed` carrying the
    /// generic user-facing message, and the detailed error is logged.
    #[instrument(skip(source), fields(source = %source.describe()))]
    pub async fn load<S: RecipeSource>(source: &S) -> Self {
        let start = Instant::now();
        let mut dashboard = Self::new();

        match source.fetch_recipes().await {
            Ok(records) => {
                let catalog = RecipeCatalog::from_api_recipes(records);
                if !catalog.skipped().is_empty() {
                    warn!(
                        "{} recipes excluded for missing or invalid data",
                        catalog.skipped().len()
                    );
                }
                info!(
                    "Loaded {} recipes in {:.2?}",
                    catalog.len(),
                    start.elapsed()
                );
                dashboard.state = LoadState::Ready(Arc::new(catalog));
            }
            Err(e) => {
                error!("Recipe fetch failed: {}", e);
                dashboard.state = LoadState::Failed(e.user_message().to_string());
            }
        }
        dashboard
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The catalog, once loaded
    pub fn catalog(&self) -> Option<&RecipeCatalog> {
        match &self.state {
            LoadState::Ready(catalog) => Some(catalog.as_ref()),
            _ => None,
        }
    }

    /// The user-facing error, if the fetch failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Filtered recipes and statistics for `spec`.
    ///
    /// Returns `None` until a catalog is loaded. Recomputes only when `spec`
    /// differs from the filter settings of the previous call.
    pub fn view(&mut self, spec: &FilterSpec) -> Option<&DashboardView> {
        let catalog = match &self.state {
            LoadState::Ready(catalog) => Arc::clone(catalog),
            _ => return None,
        };

        let stale = self
            .last_view
            .as_ref()
            .is_none_or(|(last_spec, _)| last_spec != spec);

        if stale {
            let view = compute_view(&self.pipeline, catalog.recipes(), spec);
            debug!(
                "Recomputed view: {} of {} recipes",
                view.stats.count,
                catalog.len()
            );
            self.last_view = Some((spec.clone(), view));
            self.recomputations += 1;
        }

        self.last_view.as_ref().map(|(_, view)| view)
    }

    /// How many times `view` actually recomputed
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }
}

impl Default for RecipeDashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_data::{ApiRecipe, Nutrient, Nutrition};
    use sources::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        records: Vec<ApiRecipe>,
        calls: AtomicUsize,
    }

    impl RecipeSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch_recipes(&self) -> Result<Vec<ApiRecipe>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    impl RecipeSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch_recipes(&self) -> Result<Vec<ApiRecipe>, FetchError> {
            Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn api_recipe(id: u64, title: &str, calories: Option<f64>, minutes: u32, diets: &[&str]) -> ApiRecipe {
        ApiRecipe {
            id,
            title: title.to_string(),
            ready_in_minutes: minutes,
            diets: diets.iter().map(|d| d.to_string()).collect(),
            nutrition: Nutrition {
                nutrients: calories
                    .map(|amount| {
                        vec![Nutrient {
                            name: "Calories".to_string(),
                            amount,
                            unit: "kcal".to_string(),
                        }]
                    })
                    .unwrap_or_default(),
            },
            ..Default::default()
        }
    }

    fn static_source() -> StaticSource {
        StaticSource {
            records: vec![
                api_recipe(1, "Pasta", Some(400.0), 20, &["vegetarian"]),
                api_recipe(2, "Salad", Some(150.0), 10, &["vegan", "vegetarian"]),
                api_recipe(3, "Broth", None, 90, &[]),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_load_fetches_once_and_skips_bad_records() {
        let source = static_source();
        let dashboard = RecipeDashboard::load(&source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        let catalog = dashboard.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped().len(), 1);
        assert!(dashboard.error_message().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_shows_generic_message() {
        let mut dashboard = RecipeDashboard::load(&FailingSource).await;

        assert!(matches!(dashboard.state(), LoadState::Failed(_)));
        assert_eq!(
            dashboard.error_message(),
            Some("Failed to fetch recipes. Please try again later.")
        );
        assert!(dashboard.view(&FilterSpec::default()).is_none());
    }

    #[test]
    fn test_view_before_load() {
        let mut dashboard = RecipeDashboard::new();
        assert!(matches!(dashboard.state(), LoadState::Loading));
        assert!(dashboard.view(&FilterSpec::default()).is_none());
        assert_eq!(dashboard.recompute_count(), 0);
    }

    #[tokio::test]
    async fn test_view_matches_scenario() {
        let mut dashboard = RecipeDashboard::load(&static_source()).await;
        let spec = FilterSpec::new().with_calorie_range(0.0, 300.0);

        let view = dashboard.view(&spec).unwrap();

        assert_eq!(view.recipes.len(), 1);
        assert_eq!(view.recipes[0].title, "Salad");
        assert_eq!(view.stats.count, 1);
        assert_eq!(view.stats.average_calories, 150.0);
        assert_eq!(view.stats.median_calories, 150.0);
        assert_eq!(view.stats.average_cooking_time, 10.0);
        assert_eq!(view.stats.most_common_diet.as_deref(), Some("vegan"));
    }

    #[tokio::test]
    async fn test_view_is_memoized_on_spec() {
        let mut dashboard = RecipeDashboard::load(&static_source()).await;
        let vegan = FilterSpec::new().with_diet("vegan");

        let first = dashboard.view(&vegan).cloned().unwrap();
        let second = dashboard.view(&vegan).cloned().unwrap();
        assert_eq!(first, second);
        assert_eq!(dashboard.recompute_count(), 1);

        let everything = FilterSpec::default();
        assert_eq!(dashboard.view(&everything).unwrap().stats.count, 2);
        assert_eq!(dashboard.recompute_count(), 2);

        // Back to an earlier spec: only the last one is remembered
        dashboard.view(&vegan);
        assert_eq!(dashboard.recompute_count(), 3);
    }

    #[test]
    fn test_from_catalog() {
        let catalog = RecipeCatalog::from_api_recipes(vec![api_recipe(
            1,
            "Toast",
            Some(90.0),
            5,
            &[],
        )]);
        let mut dashboard = RecipeDashboard::from_catalog(catalog);

        let view = dashboard.view(&FilterSpec::default()).unwrap();
        assert_eq!(view.stats.count, 1);
        assert!(view.stats.most_common_diet.is_none());
    }
}
