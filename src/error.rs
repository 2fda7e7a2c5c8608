//! Error types for savory

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for savory application
#[derive(Debug, Error)]
pub enum SavoryError {
    #[error("Not a savory data directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Please enter ingredients or a recipe name")]
    EmptyQuery,

    #[error("Search term is too short")]
    QueryTooShort,

    #[error("Please enter valid ingredients or a recipe name")]
    InvalidQuery(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Page {page} is out of range (1-{total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(u64),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SavoryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SavoryError::NotInitialized(_) => 2,
            SavoryError::EmptyQuery
            | SavoryError::QueryTooShort
            | SavoryError::InvalidQuery(_)
            | SavoryError::InvalidFilter(_)
            | SavoryError::PageOutOfRange { .. } => 3,
            SavoryError::RecipeNotFound(_) => 4,
            SavoryError::MissingApiKey => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SavoryError::NotInitialized(path) => {
                format!(
                    "Not a savory data directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'savory init' to create it\n\
                    • Set SAVORY_HOME to an existing data directory\n\
                    • Pass --home <dir> to use a different directory",
                    path.display()
                )
            }
            SavoryError::EmptyQuery | SavoryError::QueryTooShort => {
                format!(
                    "{}\n\n\
                    Examples:\n\
                    savory search pasta\n\
                    savory search chicken, rice, garlic",
                    self
                )
            }
            SavoryError::InvalidQuery(query) => {
                format!(
                    "{}: '{}'\n\n\
                    Use letters, spaces and commas only.\n\
                    Try using different keywords or check your spelling.",
                    self, query
                )
            }
            SavoryError::InvalidFilter(msg) => {
                format!(
                    "Invalid filter: {}\n\n\
                    Use 'savory filters options' to see valid values",
                    msg
                )
            }
            SavoryError::RecipeNotFound(id) => {
                format!(
                    "Recipe not found: {}\n\n\
                    Suggestions:\n\
                    • Check the recipe id shown in 'savory results'\n\
                    • Use 'savory favorites' to see saved recipes",
                    id
                )
            }
            SavoryError::MissingApiKey => "No API key configured\n\n\
                Suggestions:\n\
                • Set SPOONACULAR_API_KEY environment variable\n\
                • Configure it: savory config api_key <KEY>"
                .to_string(),
            SavoryError::Api(msg) => {
                format!("{}\n\nTry again in a moment or check your API key.", msg)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SavoryError
pub type Result<T> = std::result::Result<T, SavoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            SavoryError::EmptyQuery.to_string(),
            "Please enter ingredients or a recipe name"
        );
        assert_eq!(
            SavoryError::QueryTooShort.to_string(),
            "Search term is too short"
        );
        assert_eq!(
            SavoryError::InvalidQuery("xyz123".to_string()).to_string(),
            "Please enter valid ingredients or a recipe name"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SavoryError::NotInitialized(PathBuf::from("/tmp")).exit_code(), 2);
        assert_eq!(SavoryError::EmptyQuery.exit_code(), 3);
        assert_eq!(SavoryError::InvalidFilter("x".to_string()).exit_code(), 3);
        assert_eq!(SavoryError::RecipeNotFound(7).exit_code(), 4);
        assert_eq!(SavoryError::MissingApiKey.exit_code(), 5);
        assert_eq!(SavoryError::Api("boom".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_not_initialized_suggestion() {
        let err = SavoryError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("savory init"));
        assert!(msg.contains("SAVORY_HOME"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_query_echoes_input() {
        let err = SavoryError::InvalidQuery("xyz123".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'xyz123'"));
        assert!(msg.contains("check your spelling"));
    }

    #[test]
    fn test_missing_api_key_suggestions() {
        let msg = SavoryError::MissingApiKey.display_with_suggestions();
        assert!(msg.contains("SPOONACULAR_API_KEY"));
        assert!(msg.contains("savory config api_key"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = SavoryError::Config("bad value".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad value");
    }
}
