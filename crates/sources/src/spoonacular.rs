//! HTTP recipe source backed by the Spoonacular complex search endpoint.
//!
//! One `GET {base_url}/recipes/complexSearch` per fetch with the query
//! parameters `apiKey`, `number` and `addRecipeNutrition=true`. A non-2xx
//! status, a transport failure, a timeout and an undecodable body are all
//! reported as `FetchError`.

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::traits::RecipeSource;
use recipe_data::{ApiRecipe, parse_search_response};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument};

const SEARCH_PATH: &str = "/recipes/complexSearch";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery<'a> {
    api_key: &'a str,
    number: u32,
    add_recipe_nutrition: bool,
}

/// Fetches recipes from the Spoonacular API.
#[derive(Clone)]
pub struct SpoonacularSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl SpoonacularSource {
    /// Create a source with its own HTTP client.
    ///
    /// The client enforces `config.timeout` on the whole request.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Full URL of the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}{}", self.config.base_url, SEARCH_PATH)
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else {
            FetchError::Request(err)
        }
    }
}

impl RecipeSource for SpoonacularSource {
    fn describe(&self) -> String {
        format!("spoonacular ({})", self.config.base_url)
    }

    #[instrument(skip(self), fields(page_size = self.config.page_size))]
    async fn fetch_recipes(&self) -> Result<Vec<ApiRecipe>, FetchError> {
        let start = Instant::now();
        let url = self.search_url();
        debug!("Requesting {}", url);

        let query = SearchQuery {
            api_key: self.config.api_key.expose(),
            number: self.config.page_size,
            add_recipe_nutrition: true,
        };

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let search = parse_search_response(&body)?;

        info!(
            "Fetched {} recipes in {:.2?}",
            search.results.len(),
            start.elapsed()
        );
        Ok(search.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_search_url() {
        let config = SourceConfig::new(ApiKey::new("k")).with_base_url("http://localhost:9000");
        let source = SpoonacularSource::new(config).unwrap();

        assert_eq!(
            source.search_url(),
            "http://localhost:9000/recipes/complexSearch"
        );
        assert!(source.describe().contains("localhost:9000"));
    }
}
