//! # Recipe Data Crate
//!
//! Domain types for recipe search results and the validated in-memory
//! recipe set that the rest of the workspace works on.
//!
//! ## Main Components
//!
//! - **types**: Wire types (`SearchResponse`, `ApiRecipe`) and domain types
//!   (`Recipe`, `RecipeCatalog`)
//! - **parser**: Parse search payloads and convert wire records into recipes
//! - **catalog**: Build a `RecipeCatalog`, excluding records that fail validation
//! - **error**: Error types for parsing and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use recipe_data::{RecipeCatalog, parse_search_response};
//!
//! let response = parse_search_response(&body)?;
//! let catalog = RecipeCatalog::from_response(response);
//!
//! for skipped in catalog.skipped() {
//!     println!("skipped {}: {}", skipped.title, skipped.reason);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{RecipeDataError, Result};
pub use parser::{extract_calories, parse_search_file, parse_search_response};
pub use types::{
    ApiRecipe, CALORIES_NUTRIENT, Nutrient, Nutrition, Recipe, RecipeCatalog, RecipeId,
    SearchResponse, SkippedRecipe,
};
