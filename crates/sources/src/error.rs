//! Errors raised at the recipe source boundary.

use recipe_data::RecipeDataError;
use std::time::Duration;
use thiserror::Error;

/// Message shown to the user for every kind of fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again later.";

/// Errors that can occur while fetching recipes.
///
/// The variants exist for logging. Callers that present errors to a user
/// should use [`FetchError::user_message`], which is the same for all of them.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to recipe service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Recipe service answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Recipe service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Could not decode recipe payload: {0}")]
    Decode(#[from] RecipeDataError),

    #[error("Could not read saved recipes: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// The single user-facing message for a failed fetch.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors in the source configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fetch_errors_share_one_message() {
        let status = FetchError::Status(reqwest::StatusCode::PAYMENT_REQUIRED);
        let timeout = FetchError::Timeout(Duration::from_secs(10));
        let io = FetchError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        assert_eq!(status.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(timeout.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(io.user_message(), FETCH_FAILED_MESSAGE);

        // The detailed message stays available for logs
        assert!(status.to_string().contains("402"));
    }
}
