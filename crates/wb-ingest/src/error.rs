//! Error types for ingest

use thiserror::Error;

/// Ingest errors
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Format conversion failed: {0}")]
    FormatConversion(String),

    #[error("Failed to read converted audio: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;
