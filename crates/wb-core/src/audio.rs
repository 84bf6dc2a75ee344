//! Planar multi-channel audio buffer

use crate::Sample;

/// In-memory audio buffer
///
/// Samples are stored deinterleaved, one `Vec` per channel. All
/// channels hold the same number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlock {
    /// Audio samples (deinterleaved, one Vec per channel)
    pub channels: Vec<Vec<Sample>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBlock {
    /// Create a silent block
    pub fn new(num_channels: usize, num_frames: usize, sample_rate: u32) -> Self {
        Self {
            channels: vec![vec![0.0; num_frames]; num_channels],
            sample_rate,
        }
    }

    /// Create a mono block from a sample slice
    pub fn from_mono(samples: Vec<Sample>, sample_rate: u32) -> Self {
        Self {
            channels: vec![samples],
            sample_rate,
        }
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames
    pub fn num_frames(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Mix down to a single channel by averaging
    pub fn to_mono(&self) -> Vec<Sample> {
        if self.num_channels() == 1 {
            return self.channels[0].clone();
        }

        let frames = self.num_frames();
        let num_channels = self.num_channels() as Sample;

        (0..frames)
            .map(|i| self.channels.iter().map(|c| c[i]).sum::<Sample>() / num_channels)
            .collect()
    }

    /// Get as interleaved samples
    pub fn to_interleaved(&self) -> Vec<Sample> {
        let frames = self.num_frames();
        let channels = self.num_channels();
        let mut interleaved = Vec::with_capacity(frames * channels);

        for i in 0..frames {
            for ch in &self.channels {
                interleaved.push(ch[i]);
            }
        }

        interleaved
    }

    /// Create from interleaved samples
    pub fn from_interleaved(samples: &[Sample], num_channels: usize, sample_rate: u32) -> Self {
        let num_frames = samples.len() / num_channels.max(1);
        let mut channels = vec![vec![0.0; num_frames]; num_channels];

        for (i, chunk) in samples.chunks(num_channels.max(1)).enumerate() {
            for (ch, &sample) in chunk.iter().enumerate() {
                channels[ch][i] = sample;
            }
        }

        Self {
            channels,
            sample_rate,
        }
    }

    /// Maximum absolute sample value across all channels
    pub fn peak(&self) -> Sample {
        self.channels
            .iter()
            .flat_map(|c| c.iter())
            .fold(0.0, |acc, &s| acc.max(s.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_creation() {
        let block = AudioBlock::new(2, 1000, 24000);

        assert_eq!(block.num_channels(), 2);
        assert_eq!(block.num_frames(), 1000);
        assert!((block.duration() - 1000.0 / 24000.0).abs() < 1e-9);
    }

    #[test]
    fn test_interleave_deinterleave() {
        let interleaved = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let block = AudioBlock::from_interleaved(&interleaved, 2, 24000);

        assert_eq!(block.channels[0], vec![1.0, 3.0, 5.0]);
        assert_eq!(block.channels[1], vec![2.0, 4.0, 6.0]);
        assert_eq!(block.to_interleaved(), interleaved);
    }

    #[test]
    fn test_to_mono_averages() {
        let block = AudioBlock {
            channels: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            sample_rate: 24000,
        };

        assert_eq!(block.to_mono(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_peak() {
        let block = AudioBlock {
            channels: vec![vec![0.1, -0.8], vec![0.3, 0.2]],
            sample_rate: 24000,
        };

        assert!((block.peak() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_peak_of_silence_is_zero() {
        let block = AudioBlock::new(1, 4800, 24000);
        assert_eq!(block.peak(), 0.0);
    }
}
