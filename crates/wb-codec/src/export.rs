//! Flat-tensor contract for exported encoder graphs
//!
//! Graph-export tooling cannot carry the model's nested native output
//! across runtimes, so exported encoders emit a fixed tuple of flat
//! tensors instead. Callers loading an exported graph receive exactly
//! the five values below, in this meaning, regardless of target
//! runtime, and must reshape `codes` with `(n_q, channels, time_steps)`
//! row-major before further use.

use wb_protocol::Frame;

/// The five-value output surface of an exported encoder graph
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTensors {
    /// Flat codebook indices, row-major over `(n_q, channels, time_steps)`
    pub codes: Vec<i64>,
    /// Denormalization factor; `None` for unscaled frames
    pub scale: Option<f32>,
    pub n_q: usize,
    pub channels: usize,
    pub time_steps: usize,
}

/// Flatten a frame into the exported-graph output tuple
///
/// Uses the same row-major order as the wire codec, so a caller of an
/// exported graph and a caller of the HTTP service reconstruct
/// identical arrays.
pub fn flatten_for_export(frame: &Frame) -> ExportTensors {
    let (n_q, channels, time_steps) = frame.codes().dim();

    ExportTensors {
        codes: frame.codes().iter().map(|&c| c as i64).collect(),
        scale: frame.scale(),
        n_q,
        channels,
        time_steps,
    }
}
