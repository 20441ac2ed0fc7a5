//! Error types for the metadata repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during metadata repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Descriptor or file not found on the backend
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// API error (HTTP requests, authentication, etc.)
    #[error("API error: {0}")]
    ApiError(String),

    /// Parse error (JSON payloads)
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
