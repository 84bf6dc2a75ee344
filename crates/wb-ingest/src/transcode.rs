//! External transcode tool invocation

use std::path::Path;
use std::process::Command;

use log::{debug, info};
use wb_core::AudioBlock;

use crate::{IngestError, IngestResult};

/// Default transcoding tool; override with the `WB_FFMPEG` env var
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// Convert uploaded audio bytes to mono PCM at `target_rate`
///
/// The upload is written to a scratch file, converted with the
/// configured external tool, and read back as a mono [`AudioBlock`].
/// Scratch files live in a [`tempfile::TempDir`] so they are removed
/// when this function returns, on success and on every error path.
pub fn transcode_to_native(input: &[u8], target_rate: u32) -> IngestResult<AudioBlock> {
    let tool = std::env::var("WB_FFMPEG").unwrap_or_else(|_| DEFAULT_TOOL.to_string());
    transcode_with(&tool, input, target_rate)
}

/// [`transcode_to_native`] with an explicit tool binary
pub fn transcode_with(tool: &str, input: &[u8], target_rate: u32) -> IngestResult<AudioBlock> {
    let scratch = tempfile::tempdir()?;
    let input_path = scratch.path().join("upload.bin");
    let output_path = scratch.path().join("converted.wav");

    std::fs::write(&input_path, input)?;
    debug!("wrote {} upload bytes to {:?}", input.len(), input_path);

    let output = Command::new(tool)
        .arg("-i")
        .arg(&input_path)
        .args(["-ar", &target_rate.to_string()])
        .args(["-ac", "1"])
        .arg("-y")
        .arg(&output_path)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::FormatConversion(format!(
            "{tool} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let block = read_wav_block(&output_path)?;
    info!(
        "transcoded upload to {} Hz mono, {} frames",
        block.sample_rate,
        block.num_frames()
    );
    Ok(block)
}

/// Read a WAV file into a planar block
pub fn read_wav_block(path: &Path) -> IngestResult<AudioBlock> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let num_channels = spec.channels as usize;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(AudioBlock::from_interleaved(
        &samples,
        num_channels,
        spec.sample_rate,
    ))
}
