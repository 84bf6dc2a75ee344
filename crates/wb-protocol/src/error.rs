//! Error types for the frame exchange protocol

use thiserror::Error;

/// Frame protocol errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid frame shape: {0}")]
    Shape(String),

    #[error("Code value outside codebook range: {0}")]
    Range(String),

    #[error(
        "Flat code length {actual} does not match declared structure \
         {n_q}x{channels}x{time_steps} = {expected}"
    )]
    LengthMismatch {
        expected: usize,
        actual: usize,
        n_q: usize,
        channels: usize,
        time_steps: usize,
    },
}

/// Result type for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;
