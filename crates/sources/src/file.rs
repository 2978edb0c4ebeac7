//! Recipe source that replays a search response saved on disk.

use crate::error::FetchError;
use crate::traits::RecipeSource;
use recipe_data::{ApiRecipe, parse_search_response};
use std::path::PathBuf;
use tracing::info;

/// Reads a previously saved search response instead of calling the API.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeSource for FileSource {
    fn describe(&self) -> String {
        format!("file ({})", self.path.display())
    }

    async fn fetch_recipes(&self) -> Result<Vec<ApiRecipe>, FetchError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let search = parse_search_response(&body)?;
        info!(
            "Loaded {} recipes from {}",
            search.results.len(),
            self.path.display()
        );
        Ok(search.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let source = FileSource::new("/definitely/not/here.json");
        let err = source.fetch_recipes().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[tokio::test]
    async fn test_reads_saved_response() {
        let path = std::env::temp_dir().join(format!("recipes-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"results": [{"id": 1, "title": "Toast", "readyInMinutes": 5,
                "nutrition": {"nutrients": [{"name": "Calories", "amount": 90.0, "unit": "kcal"}]}}]}"#,
        )
        .unwrap();

        let recipes = FileSource::new(&path).fetch_recipes().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Toast");
    }
}
