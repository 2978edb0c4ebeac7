//! Filter implementations for the recipe pipeline.
//!
//! One filter per `FilterSpec` setting. `FilterPipeline::standard()` chains
//! them in this order: title search, diet, cuisine, calorie range,
//! cooking time.

pub mod calorie_range;
pub mod cooking_time;
pub mod cuisine;
pub mod diet;
pub mod title_search;

// Re-export for convenience
pub use calorie_range::CalorieRangeFilter;
pub use cooking_time::CookingTimeFilter;
pub use cuisine::CuisineFilter;
pub use diet::DietFilter;
pub use title_search::TitleSearchFilter;
