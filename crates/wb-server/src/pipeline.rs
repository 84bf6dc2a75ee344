//! Request pipelines
//!
//! Encode: upload bytes → transcode → split → per-chunk encode →
//! serialized frames. Decode: serialized frames → validate → per-frame
//! decode → reassemble → resample → normalize → store.
//!
//! Per-chunk codec calls fan out over rayon; each call still takes the
//! shared model lock, and the indexed collect keeps chunk order
//! independent of completion order. Reassembly only runs once every
//! chunk has finished.

use rayon::prelude::*;
use serde::Deserialize;
use wb_codec::SharedCodec;
use wb_core::AudioBlock;
use wb_protocol::SerializedFrame;
use wb_store::{ArtifactHandle, ArtifactStore};

use crate::{ServerError, WbConfig};

/// Result of one encode request
#[derive(Debug)]
pub struct EncodeOutcome {
    pub frames: Vec<SerializedFrame>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Body of a decode request
#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub encoded_data: Vec<EncodedEntry>,
    #[serde(default)]
    pub sample_rate: Option<u32>,
    #[serde(default)]
    pub channels: Option<u16>,
}

/// One entry of `encoded_data`
///
/// The canonical layout is a flat list of serialized frames, but some
/// clients nest their frames under a `chunks` key inside the first
/// entry; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EncodedEntry {
    Frame(SerializedFrame),
    Chunked { chunks: Vec<SerializedFrame> },
}

impl DecodeRequest {
    /// Flatten both accepted payload layouts into one ordered frame list
    pub fn into_frames(self) -> Vec<SerializedFrame> {
        self.encoded_data
            .into_iter()
            .flat_map(|entry| match entry {
                EncodedEntry::Frame(frame) => vec![frame],
                EncodedEntry::Chunked { chunks } => chunks,
            })
            .collect()
    }
}

/// Result of one decode request
#[derive(Debug)]
pub struct DecodeOutcome {
    pub handle: ArtifactHandle,
    pub sample_rate: u32,
    pub total_chunks: usize,
}

/// Run the full encode path for one upload
pub fn encode_pipeline(
    cfg: &WbConfig,
    codec: &SharedCodec,
    body: &[u8],
) -> Result<EncodeOutcome, ServerError> {
    let block = wb_ingest::transcode_to_native(body, cfg.native_sample_rate)?;
    let mono = block.to_mono();

    let chunks = wb_codec::split(&mono, cfg.chunk_length)?;
    tracing::info!(
        frames = mono.len(),
        chunks = chunks.len(),
        "encoding upload"
    );

    let frames = chunks
        .par_iter()
        .map(|chunk| {
            let mut codec = codec.lock();
            codec.encode(chunk).map(|f| wb_protocol::serialize(&f))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EncodeOutcome {
        frames,
        sample_rate: cfg.native_sample_rate,
        channels: 1,
    })
}

/// Run the full decode path for one request
pub fn decode_pipeline(
    cfg: &WbConfig,
    codec: &SharedCodec,
    store: &ArtifactStore,
    request: DecodeRequest,
) -> Result<DecodeOutcome, ServerError> {
    let wires = request.into_frames();

    let frames = wires
        .iter()
        .map(wb_protocol::deserialize)
        .collect::<Result<Vec<_>, _>>()?;

    if frames.is_empty() {
        return Err(wb_codec::CodecError::EmptyInput.into());
    }
    tracing::info!(chunks = frames.len(), "decoding request");

    let segments = frames
        .par_iter()
        .map(|frame| {
            let mut codec = codec.lock();
            codec
                .decode(frame)
                .map(|samples| AudioBlock::from_mono(samples, cfg.native_sample_rate))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Ordering barrier: all chunks are in hand before concatenation.
    let whole = wb_codec::reassemble(&segments)?;

    let mut delivered = wb_dsp::resample(&whole, cfg.delivery_sample_rate)?;
    wb_dsp::normalize_peak(&mut delivered);

    let handle = store.save(&delivered)?;

    Ok(DecodeOutcome {
        handle,
        sample_rate: cfg.delivery_sample_rate,
        total_chunks: frames.len(),
    })
}
