//! Core domain types for recipe search results.
//!
//! Two layers live here:
//! - Wire types (`SearchResponse`, `ApiRecipe`, `Nutrient`) mirror the JSON
//!   returned by the recipe search endpoint and are deliberately permissive.
//! - Domain types (`Recipe`, `RecipeCatalog`) are validated: every `Recipe`
//!   carries an extracted calorie value, so downstream code never has to
//!   look it up again.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a recipe, stable within one fetch
pub type RecipeId = u64;

/// Name of the nutrient entry that carries the calorie amount
pub const CALORIES_NUTRIENT: &str = "Calories";

// =============================================================================
// Wire Types
// =============================================================================

/// Top-level body of a recipe search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<ApiRecipe>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

/// A recipe exactly as the search endpoint returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
}

impl ApiRecipe {
    /// Amount of the first nutrient whose name matches exactly.
    pub fn nutrient_amount(&self, name: &str) -> Option<f64> {
        self.nutrition
            .nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
    }
}

/// Nutrition block attached when the search asks for nutrition data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// One nutrient line, e.g. `{"name": "Calories", "amount": 412.5, "unit": "kcal"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

// =============================================================================
// Domain Types
// =============================================================================

/// A validated recipe, ready for filtering and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    /// Diet tags, e.g. "vegan" (may be empty)
    pub diets: Vec<String>,
    /// Cuisine tags, e.g. "Italian" (may be empty)
    pub cuisines: Vec<String>,
    /// Calories per serving, taken from the "Calories" nutrient
    pub calories: f64,
}

/// A record that was rejected while building the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecipe {
    pub id: RecipeId,
    pub title: String,
    pub reason: String,
}

// =============================================================================
// RecipeCatalog - the recipe set for one fetch
// =============================================================================

/// The full, read-only recipe set produced by one fetch.
///
/// Recipes keep the order the source delivered them in. Records that failed
/// validation are kept aside in `skipped` so callers can report them.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) skipped: Vec<SkippedRecipe>,
    /// Position of each recipe in `recipes`
    pub(crate) by_id: HashMap<RecipeId, usize>,
}

impl RecipeCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All accepted recipes in source order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Records that were excluded, with the reason
    pub fn skipped(&self) -> &[SkippedRecipe] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Get a recipe by ID
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.by_id.get(&id).map(|&pos| &self.recipes[pos])
    }

    /// Distinct diet tags in first-seen order
    pub fn diets(&self) -> Vec<&str> {
        distinct_tags(self.recipes.iter().flat_map(|r| r.diets.iter()))
    }

    /// Distinct cuisine tags in first-seen order
    pub fn cuisines(&self) -> Vec<&str> {
        distinct_tags(self.recipes.iter().flat_map(|r| r.cuisines.iter()))
    }

    /// Insert an already validated recipe.
    ///
    /// A second recipe with the same id replaces the first one in place.
    pub fn insert_recipe(&mut self, recipe: Recipe) {
        match self.by_id.get(&recipe.id) {
            Some(&pos) => self.recipes[pos] = recipe,
            None => {
                self.by_id.insert(recipe.id, self.recipes.len());
                self.recipes.push(recipe);
            }
        }
    }
}

fn distinct_tags<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    tags.filter(|t| seen.insert(t.as_str()))
        .map(String::as_str)
        .collect()
}
