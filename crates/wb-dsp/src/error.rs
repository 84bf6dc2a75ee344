//! Error types for post-processing

use thiserror::Error;

/// Post-processing errors
#[derive(Error, Debug)]
pub enum DspError {
    #[error("Resampling failed: {0}")]
    Resample(String),

    #[error("Empty input: nothing to process")]
    EmptyInput,
}

/// Result type for DSP operations
pub type DspResult<T> = Result<T, DspError>;
