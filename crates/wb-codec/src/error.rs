//! Error types for the codec boundary

use thiserror::Error;
use wb_protocol::ProtocolError;

/// Codec boundary errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Codec execution failed: {0}")]
    Execution(String),

    #[error("Empty input: at least one segment is required")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Shape mismatch: {0}")]
    Shape(String),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
