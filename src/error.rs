//! Domain-specific error types for scholar-lens

use thiserror::Error;

/// Main error type for the scholar-lens analysis pipeline
#[derive(Error, Debug)]
pub enum ScholarLensError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Provider error: HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Bookmark error: {message}")]
    Bookmark { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ScholarLensError {
    /// Stable machine-readable kind, used by the HTTP error body
    pub fn kind(&self) -> &'static str {
        match self {
            ScholarLensError::Config { .. } => "config",
            ScholarLensError::Provider { .. } => "provider",
            ScholarLensError::Parse { .. } => "parse",
            ScholarLensError::Schema { .. } => "schema",
            ScholarLensError::Validation { .. } => "validation",
            ScholarLensError::Serialization { .. } => "serialization",
            ScholarLensError::Bookmark { .. } => "bookmark",
            ScholarLensError::Internal { .. } => "internal",
        }
    }
}

impl From<anyhow::Error> for ScholarLensError {
    fn from(err: anyhow::Error) -> Self {
        ScholarLensError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ScholarLensError {
    fn from(err: serde_json::Error) -> Self {
        ScholarLensError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ScholarLensError {
    fn from(err: reqwest::Error) -> Self {
        ScholarLensError::Internal {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<std::io::Error> for ScholarLensError {
    fn from(err: std::io::Error) -> Self {
        ScholarLensError::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}

/// Result type alias for scholar-lens operations
pub type Result<T> = std::result::Result<T, ScholarLensError>;
