//! Error types for the artifact store

use thiserror::Error;

/// Artifact store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid artifact name: {0}")]
    InvalidName(String),

    #[error("Failed to write artifact: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
