//! Canonical in-memory representation of one quantized audio frame

use ndarray::Array3;

use crate::{ProtocolError, ProtocolResult};

/// Number of entries in the codec's quantizer codebook
pub const CODEBOOK_SIZE: u16 = 1024;

/// Largest valid codebook index
pub const MAX_CODE: u16 = CODEBOOK_SIZE - 1;

/// One quantized segment of audio as produced by the neural codec
///
/// `codes` is indexed `(quantizer, channel, time_step)`; every value is
/// a codebook index in `[0, MAX_CODE]`. `scale` is an optional
/// denormalization factor applied by the decoder; `None` means the
/// frame is unscaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    codes: Array3<u16>,
    scale: Option<f32>,
}

impl Frame {
    /// Construct a frame, validating dimensions, code range, and scale
    pub fn new(codes: Array3<u16>, scale: Option<f32>) -> ProtocolResult<Self> {
        let (n_q, channels, time_steps) = codes.dim();
        if n_q == 0 || channels == 0 || time_steps == 0 {
            return Err(ProtocolError::Shape(format!(
                "frame dimensions must be positive, got {n_q}x{channels}x{time_steps}"
            )));
        }

        if let Some(&bad) = codes.iter().find(|&&c| c > MAX_CODE) {
            return Err(ProtocolError::Range(format!(
                "code {bad} exceeds codebook bound {MAX_CODE}"
            )));
        }

        if let Some(s) = scale {
            if !s.is_finite() || s < 0.0 {
                return Err(ProtocolError::Range(format!(
                    "scale must be finite and non-negative, got {s}"
                )));
            }
        }

        Ok(Self { codes, scale })
    }

    /// Codebook indices, shape `(num_quantizers, channels, time_steps)`
    pub fn codes(&self) -> &Array3<u16> {
        &self.codes
    }

    /// Denormalization factor, if the frame carries one
    pub fn scale(&self) -> Option<f32> {
        self.scale
    }

    /// Number of residual quantizer stages
    pub fn num_quantizers(&self) -> usize {
        self.codes.dim().0
    }

    /// Number of audio channels
    pub fn channels(&self) -> usize {
        self.codes.dim().1
    }

    /// Number of quantized time steps
    pub fn time_steps(&self) -> usize {
        self.codes.dim().2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_frame_construction() {
        let codes = Array3::from_elem((8, 1, 150), 42u16);
        let frame = Frame::new(codes, Some(0.5)).unwrap();

        assert_eq!(frame.num_quantizers(), 8);
        assert_eq!(frame.channels(), 1);
        assert_eq!(frame.time_steps(), 150);
        assert_eq!(frame.scale(), Some(0.5));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let codes = Array3::<u16>::zeros((0, 1, 10));
        assert!(matches!(
            Frame::new(codes, None),
            Err(ProtocolError::Shape(_))
        ));
    }

    #[test]
    fn test_out_of_range_code_rejected() {
        let codes = Array3::from_elem((1, 1, 3), CODEBOOK_SIZE);
        assert!(matches!(
            Frame::new(codes, None),
            Err(ProtocolError::Range(_))
        ));
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let codes = Array3::from_elem((1, 1, 3), 0u16);
        assert!(matches!(
            Frame::new(codes, Some(f32::NAN)),
            Err(ProtocolError::Range(_))
        ));
    }

    #[test]
    fn test_negative_scale_rejected() {
        let codes = Array3::from_elem((1, 1, 3), 0u16);
        assert!(matches!(
            Frame::new(codes, Some(-1.0)),
            Err(ProtocolError::Range(_))
        ));
    }
}
