//! Chunker / reassembler
//!
//! Long audio is split into bounded-length chunks before encoding and
//! decoded chunks are concatenated back in split order. Order is the
//! whole contract: reassembly is an ordering barrier, never a stream.

use wb_core::AudioBlock;

use crate::{CodecError, CodecResult};

/// Split raw samples into chunks of `chunk_length` samples
///
/// The final chunk may be shorter; nothing is ever padded here (the
/// codec owns padding at encode time if it needs any).
pub fn split(samples: &[f32], chunk_length: usize) -> CodecResult<Vec<&[f32]>> {
    if chunk_length == 0 {
        return Err(CodecError::Configuration(
            "chunk_length must be positive".to_string(),
        ));
    }

    Ok(samples.chunks(chunk_length).collect())
}

/// Concatenate decoded segments along the time axis, in input order
///
/// All segments must agree on channel count. The output takes its
/// sample rate from the first segment.
pub fn reassemble(segments: &[AudioBlock]) -> CodecResult<AudioBlock> {
    let first = segments.first().ok_or(CodecError::EmptyInput)?;
    let num_channels = first.num_channels();

    for (i, seg) in segments.iter().enumerate() {
        if seg.num_channels() != num_channels {
            return Err(CodecError::Shape(format!(
                "segment {i} has {} channels, expected {num_channels}",
                seg.num_channels()
            )));
        }
    }

    let total_frames: usize = segments.iter().map(|s| s.num_frames()).sum();
    let mut channels = vec![Vec::with_capacity(total_frames); num_channels];

    for seg in segments {
        for (ch, out) in seg.channels.iter().zip(channels.iter_mut()) {
            out.extend_from_slice(ch);
        }
    }

    Ok(AudioBlock {
        channels,
        sample_rate: first.sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exact_and_remainder() {
        let samples: Vec<f32> = (0..10).map(|i| i as f32).collect();

        let chunks = split(&samples, 4).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], &samples[0..4]);
        assert_eq!(chunks[1], &samples[4..8]);
        assert_eq!(chunks[2], &samples[8..10]);
    }

    #[test]
    fn test_split_zero_chunk_length_rejected() {
        assert!(matches!(
            split(&[0.0; 8], 0),
            Err(CodecError::Configuration(_))
        ));
    }

    #[test]
    fn test_split_reassemble_identity() {
        let samples: Vec<f32> = (0..100_000).map(|i| (i as f32 * 0.001).sin()).collect();

        for chunk_length in [1, 7, 45_000, 100_000, 200_000] {
            let segments: Vec<AudioBlock> = split(&samples, chunk_length)
                .unwrap()
                .into_iter()
                .map(|c| AudioBlock::from_mono(c.to_vec(), 24000))
                .collect();

            let whole = reassemble(&segments).unwrap();

            assert_eq!(whole.channels[0], samples, "chunk_length {chunk_length}");
            assert_eq!(whole.sample_rate, 24000);
        }
    }

    #[test]
    fn test_reassemble_preserves_input_order() {
        let a = AudioBlock::from_mono(vec![1.0, 2.0], 24000);
        let b = AudioBlock::from_mono(vec![3.0], 24000);
        let c = AudioBlock::from_mono(vec![4.0, 5.0], 24000);

        let whole = reassemble(&[a, b, c]).unwrap();

        assert_eq!(whole.channels[0], vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_reassemble_empty_rejected() {
        assert!(matches!(reassemble(&[]), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn test_reassemble_channel_mismatch_rejected() {
        let mono = AudioBlock::from_mono(vec![1.0], 24000);
        let stereo = AudioBlock::new(2, 1, 24000);

        assert!(matches!(
            reassemble(&[mono, stereo]),
            Err(CodecError::Shape(_))
        ));
    }
}
