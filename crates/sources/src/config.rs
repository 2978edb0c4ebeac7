//! Environment-based configuration for the recipe source.
//!
//! ## Configuration Sources
//! Values are read from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Variables
//! - `SPOONACULAR_API_KEY`: API credential (required)
//! - `SPOONACULAR_BASE_URL`: service root, default `https://api.spoonacular.com`
//! - `RECIPE_PAGE_SIZE`: recipes per fetch, 1-100, default 100
//! - `RECIPE_FETCH_TIMEOUT_SECS`: request timeout, default 10
//!
//! The configuration is loaded once at startup and passed down read-only.

use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

pub const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";
pub const BASE_URL_VAR: &str = "SPOONACULAR_BASE_URL";
pub const PAGE_SIZE_VAR: &str = "RECIPE_PAGE_SIZE";
pub const TIMEOUT_VAR: &str = "RECIPE_FETCH_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building requests only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Settings for the HTTP recipe source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl SourceConfig {
    /// Config with defaults for everything but the key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let mut config = Self::new(ApiKey::new(api_key));

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            let base_url = base_url.trim().trim_end_matches('/').to_string();
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: BASE_URL_VAR,
                    value: base_url,
                    reason: "expected an http(s) URL".to_string(),
                });
            }
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse_page_size(&raw)?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: TIMEOUT_VAR,
                value: raw.clone(),
                reason: "expected whole seconds".to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: raw,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        var: PAGE_SIZE_VAR,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let size: u32 = raw.trim().parse().map_err(|_| invalid("expected an integer"))?;
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(invalid("must be between 1 and 100"));
    }
    Ok(size)
}
