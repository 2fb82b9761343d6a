//! Error types for prism-core

use thiserror::Error;

/// Errors raised while loading a report into the typed model
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input is not well-formed JSON
    #[error("JSON syntax error: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Input is JSON but does not fit the report model
    #[error("Invalid report structure: {0}")]
    Structure(#[source] serde_json::Error),

    /// Input ended before a complete document was read
    #[error("Unexpected end of input: {0}")]
    Truncated(#[source] serde_json::Error),

    /// Error reading the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax => LoadError::Syntax(err),
            Category::Data => LoadError::Structure(err),
            Category::Eof => LoadError::Truncated(err),
            Category::Io => LoadError::Io(err.into()),
        }
    }
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, LoadError>;
