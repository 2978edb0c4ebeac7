//! # Sources Crate
//!
//! The boundary between the dashboard and wherever recipes come from.
//!
//! ## Components
//!
//! ### SpoonacularSource
//! One HTTP GET against the recipe search endpoint per fetch. No retry;
//! the request is bounded by the configured timeout (10s by default).
//!
//! ### FileSource
//! Replays a search response saved on disk, for offline use and fixtures.
//!
//! ### SourceConfig
//! API key and endpoint settings, loaded once from the environment.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{RecipeSource, SourceConfig, SpoonacularSource};
//!
//! let config = SourceConfig::from_env()?;
//! let source = SpoonacularSource::new(config)?;
//! let records = source.fetch_recipes().await?;
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod spoonacular;
pub mod traits;

pub use config::{ApiKey, SourceConfig};
pub use error::{ConfigError, FETCH_FAILED_MESSAGE, FetchError};
pub use file::FileSource;
pub use spoonacular::SpoonacularSource;
pub use traits::RecipeSource;
