//! Storage error types.

use thiserror::Error;

/// Errors that can occur during slot operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Blob serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for slot operations.
pub type StorageResult<T> = Result<T, StorageError>;
