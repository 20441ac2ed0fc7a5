//! SDK error types

use thiserror::Error;

/// SDK error
#[derive(Error, Debug)]
pub enum SdkError {
    /// Query construction error
    #[error(transparent)]
    Core(#[from] quiver_core::CoreError),

    /// Metadata API error
    #[error(transparent)]
    Repository(#[from] quiver_repository::RepositoryError),

    /// Read path error
    #[error(transparent)]
    Engine(#[from] quiver_engine::EngineError),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
