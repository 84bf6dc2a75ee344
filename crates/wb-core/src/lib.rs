//! wb-core: Shared types for WaveBridge
//!
//! This crate provides the audio buffer representation passed between
//! the ingest, codec, DSP, and store layers.

mod audio;

pub use audio::*;

/// Type alias for audio samples (f32 end to end — the codec seam and
/// the resampler both operate on f32)
pub type Sample = f32;
