//! Read-path error types

use thiserror::Error;

/// Read-path error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Filter tree or query violates the construction contract
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Columnar transfer service failure
    #[error("Transfer service error: {0}")]
    Transport(String),

    /// Legacy engine failure
    #[error("Legacy engine error: {0}")]
    LegacyEngine(String),

    /// Operation not available on the selected read path
    #[error("Unsupported read: {0}")]
    Unsupported(String),
}

/// Result type for read-path operations
pub type Result<T> = std::result::Result<T, EngineError>;
