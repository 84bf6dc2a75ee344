//! Whole-buffer sample rate conversion

use log::debug;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use wb_core::AudioBlock;

use crate::{DspError, DspResult};

const PROCESS_CHUNK: usize = 1024;

fn sinc_parameters() -> SincInterpolationParameters {
    SincInterpolationParameters {
        sinc_len: 128,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 128,
        window: WindowFunction::BlackmanHarris2,
    }
}

/// Resample a block to `target_rate`
///
/// A no-op (clone) when the block is already at the target rate. The
/// resampler's startup delay is trimmed from the head and the output
/// is cut to `round(frames * ratio)` so durations stay aligned with
/// the input.
pub fn resample(block: &AudioBlock, target_rate: u32) -> DspResult<AudioBlock> {
    if block.sample_rate == target_rate {
        return Ok(block.clone());
    }
    if block.num_frames() == 0 || block.num_channels() == 0 {
        return Err(DspError::EmptyInput);
    }

    let ratio = target_rate as f64 / block.sample_rate as f64;
    let num_channels = block.num_channels();
    let expected_frames = (block.num_frames() as f64 * ratio).round() as usize;

    let mut resampler = SincFixedIn::<f32>::new(
        ratio,
        2.0,
        sinc_parameters(),
        PROCESS_CHUNK,
        num_channels,
    )
    .map_err(|e| DspError::Resample(e.to_string()))?;

    let delay = resampler.output_delay();
    let mut output: Vec<Vec<f32>> = vec![Vec::with_capacity(expected_frames + delay); num_channels];
    let mut pos = 0;

    loop {
        let needed = resampler.input_frames_next();
        if pos + needed > block.num_frames() {
            break;
        }

        let input: Vec<&[f32]> = block
            .channels
            .iter()
            .map(|c| &c[pos..pos + needed])
            .collect();
        let out = resampler
            .process(&input, None)
            .map_err(|e| DspError::Resample(e.to_string()))?;
        append_planar(&mut output, &out);
        pos += needed;
    }

    // Trailing partial chunk
    if pos < block.num_frames() {
        let input: Vec<&[f32]> = block.channels.iter().map(|c| &c[pos..]).collect();
        let out = resampler
            .process_partial(Some(&input), None)
            .map_err(|e| DspError::Resample(e.to_string()))?;
        append_planar(&mut output, &out);
    }

    // Flush the sinc delay line until the trimmed output is covered.
    while output[0].len() < delay + expected_frames {
        let out = resampler
            .process_partial::<&[f32]>(None, None)
            .map_err(|e| DspError::Resample(e.to_string()))?;
        if out[0].is_empty() {
            break;
        }
        append_planar(&mut output, &out);
    }

    let channels: Vec<Vec<f32>> = output
        .into_iter()
        .map(|ch| {
            let end = (delay + expected_frames).min(ch.len());
            ch[delay.min(ch.len())..end].to_vec()
        })
        .collect();

    debug!(
        "resampled {} -> {} Hz: {} -> {} frames",
        block.sample_rate,
        target_rate,
        block.num_frames(),
        channels[0].len()
    );

    Ok(AudioBlock {
        channels,
        sample_rate: target_rate,
    })
}

fn append_planar(output: &mut [Vec<f32>], chunk: &[Vec<f32>]) {
    for (out, ch) in output.iter_mut().zip(chunk.iter()) {
        out.extend_from_slice(ch);
    }
}
