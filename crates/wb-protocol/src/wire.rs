//! Transport-safe serialized frame form
//!
//! A frame crosses the HTTP boundary as a flat numeric sequence plus a
//! structure descriptor. Flattening order is quantizer-major, then
//! channel, then time — row-major over `(n_q, channels, time_steps)` —
//! and deserialization reshapes in exactly that order.
//!
//! The wire carries codes as f64 (JSON numbers): a peer may hand us
//! floats, so decode rounds to the nearest integer and clamps into the
//! codebook range rather than failing the request. Non-finite values
//! have no meaningful codebook index and are rejected.

use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::{Frame, MAX_CODE, ProtocolError, ProtocolResult};

/// Shape metadata required to reshape a flat code sequence
///
/// Field names (`n_q`, `channels`, `time_steps`) are the wire contract
/// shared with every peer; do not rename them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub n_q: usize,
    pub channels: usize,
    pub time_steps: usize,
}

impl Structure {
    /// Number of flat code values this structure implies
    pub fn element_count(&self) -> usize {
        self.n_q * self.channels * self.time_steps
    }
}

/// Wire form of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedFrame {
    /// Flat codebook indices in row-major order
    pub codes: Vec<f64>,
    /// Denormalization factor; `null`/absent means unscaled
    #[serde(default)]
    pub scale: Option<f64>,
    /// Shape descriptor for reconstruction
    pub structure: Structure,
}

/// Flatten a frame into its wire form
///
/// Always succeeds for a well-formed frame; the inverse of
/// [`deserialize`] for any frame whose codes are already in range.
pub fn serialize(frame: &Frame) -> SerializedFrame {
    let (n_q, channels, time_steps) = frame.codes().dim();

    SerializedFrame {
        // ndarray iterates a standard-layout Array3 in row-major
        // (quantizer, channel, time) order, which is the wire order.
        codes: frame.codes().iter().map(|&c| c as f64).collect(),
        scale: frame.scale().map(f64::from),
        structure: Structure {
            n_q,
            channels,
            time_steps,
        },
    }
}

/// Validate and reconstruct a frame from its wire form
///
/// Fails with `LengthMismatch` when the flat sequence disagrees with
/// the declared structure; never truncates or pads. Finite values are
/// rounded and clamped into `[0, MAX_CODE]`; non-finite values fail
/// with `Range`.
pub fn deserialize(wire: &SerializedFrame) -> ProtocolResult<Frame> {
    let Structure {
        n_q,
        channels,
        time_steps,
    } = wire.structure;

    let expected = wire.structure.element_count();
    if wire.codes.len() != expected {
        return Err(ProtocolError::LengthMismatch {
            expected,
            actual: wire.codes.len(),
            n_q,
            channels,
            time_steps,
        });
    }

    let mut values = Vec::with_capacity(expected);
    for &v in &wire.codes {
        if !v.is_finite() {
            return Err(ProtocolError::Range(format!(
                "non-finite code value {v} on the wire"
            )));
        }
        values.push(v.round().clamp(0.0, MAX_CODE as f64) as u16);
    }

    let codes = Array3::from_shape_vec((n_q, channels, time_steps), values)
        .map_err(|e| ProtocolError::Shape(e.to_string()))?;

    Frame::new(codes, wire.scale.map(|s| s as f32))
}
