//! The seam to the external neural codec

use std::sync::Arc;

use parking_lot::Mutex;
use wb_protocol::Frame;

use crate::{Bandwidth, CodecResult};

/// Narrow interface over the external encode/decode calls
///
/// Implementations wrap a pretrained model instance. The methods take
/// `&mut self` on purpose: the underlying model carries internal
/// numeric buffers and must never be invoked concurrently. Share an
/// instance through [`SharedCodec`], which serializes access; run a
/// pool of independent instances if throughput requires real
/// parallelism.
pub trait AudioCodec: Send {
    /// Encode one chunk of mono samples at [`Self::sample_rate`] into a
    /// quantized frame
    fn encode(&mut self, samples: &[f32]) -> CodecResult<Frame>;

    /// Decode one frame back into mono samples at [`Self::sample_rate`]
    fn decode(&mut self, frame: &Frame) -> CodecResult<Vec<f32>>;

    /// The sample rate the model expects on input and produces on output
    fn sample_rate(&self) -> u32;

    /// The target bandwidth the model is configured for
    fn bandwidth(&self) -> Bandwidth;
}

/// A codec instance shared process-wide
///
/// Loaded once at boot and handed to every request. The mutex is the
/// single global exclusion required by the model's non-reentrancy; no
/// teardown beyond process exit.
pub type SharedCodec = Arc<Mutex<Box<dyn AudioCodec>>>;

/// Wrap a codec for process-wide sharing
pub fn share(codec: impl AudioCodec + 'static) -> SharedCodec {
    Arc::new(Mutex::new(Box::new(codec)))
}
