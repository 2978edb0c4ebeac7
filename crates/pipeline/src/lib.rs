//! Filtering and aggregation of recipe sets.
//!
//! This crate provides:
//! - `FilterSpec`, the user's filter settings
//! - Filter trait and one implementation per setting
//! - FilterPipeline for composing filters (logical AND)
//! - `aggregate` for the summary statistics over a filtered set
//!
//! Everything here is a pure function of its inputs.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, FilterSpec, aggregate};
//!
//! let spec = FilterSpec::new()
//!     .with_diet("vegan")
//!     .with_calorie_range(0.0, 500.0)
//!     .with_cooking_time("16-30");
//!
//! let filtered = FilterPipeline::standard().apply(catalog.recipes().to_vec(), &spec);
//! let stats = aggregate(&filtered);
//! ```

pub mod filter_pipeline;
pub mod filter_spec;
pub mod filters;
pub mod stats;
pub mod traits;

// Re-export main types
pub use filter_pipeline::{FilterPipeline, filter};
pub use filter_spec::{
    COOKING_TIME_PRESETS, CUISINE_PRESETS, CalorieRange, CookingTimeBucket, DIET_PRESETS,
    FilterSpec, MalformedTimeBucket,
};
pub use stats::{AggregateResult, aggregate, mean, median, most_common};
pub use traits::Filter;
