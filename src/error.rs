use thiserror::Error;

/// Main error type for the result search engine
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query rejected before matching: below the minimum length
    #[error("query must be at least {min} characters")]
    QueryTooShort { min: usize },

    /// Query rejected before matching: above the maximum length
    #[error("query must be at most {max} characters")]
    QueryTooLong { max: usize },

    /// Record data not loaded or empty; search cannot run
    #[error("result data not available from {0}; search unavailable")]
    Unavailable(String),

    /// JSON (de)serialization errors in record data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for SearchError {
    fn from(s: String) -> Self {
        SearchError::Other(s)
    }
}

impl From<&str> for SearchError {
    fn from(s: &str) -> Self {
        SearchError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SearchError>;
