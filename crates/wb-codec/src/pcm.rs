//! Deterministic reference codec
//!
//! A 10-bit PCM quantizer shaped like the real model: one quantizer
//! stage, mono, one time step per sample. It exists so the protocol
//! layer, chunker, and post-processing pipeline are fully exercisable
//! without any neural weights, and it is the codec the services fall
//! back to when no external model is wired in.

use ndarray::Array3;
use wb_protocol::Frame;

use crate::{AudioCodec, Bandwidth, CodecError, CodecResult};

// Symmetric around code 512 so that a zero sample survives a
// quantize/dequantize round-trip exactly.
const MIDPOINT: i32 = 512;
const HALF_RANGE: f32 = 511.0;

/// 10-bit PCM stand-in for the external neural codec
pub struct PcmCodec {
    sample_rate: u32,
    bandwidth: Bandwidth,
}

impl PcmCodec {
    pub fn new(sample_rate: u32, bandwidth: Bandwidth) -> Self {
        Self {
            sample_rate,
            bandwidth,
        }
    }
}

impl AudioCodec for PcmCodec {
    fn encode(&mut self, samples: &[f32]) -> CodecResult<Frame> {
        if samples.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let codes: Vec<u16> = samples.iter().map(|&s| quantize(s)).collect();
        let time_steps = codes.len();
        let codes = Array3::from_shape_vec((1, 1, time_steps), codes)
            .map_err(|e| CodecError::Shape(e.to_string()))?;

        Ok(Frame::new(codes, None)?)
    }

    fn decode(&mut self, frame: &Frame) -> CodecResult<Vec<f32>> {
        let gain = frame.scale().unwrap_or(1.0);

        // Frames from other codecs may carry several quantizer stages;
        // only the first stage of the first channel is meaningful here.
        Ok(frame
            .codes()
            .slice(ndarray::s![0, 0, ..])
            .iter()
            .map(|&c| dequantize(c) * gain)
            .collect())
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }
}

fn quantize(sample: f32) -> u16 {
    let code = (sample.clamp(-1.0, 1.0) * HALF_RANGE).round() as i32 + MIDPOINT;
    code as u16
}

fn dequantize(code: u16) -> f32 {
    (code as i32 - MIDPOINT) as f32 / HALF_RANGE
}
