//! Peak normalization

use wb_core::AudioBlock;

/// Target peak after normalization, leaving headroom against clipping
/// on playback
pub const TARGET_PEAK: f32 = 0.9;

/// Scale the block so its peak hits [`TARGET_PEAK`]
///
/// Silence (peak exactly zero) is left untouched — there is nothing to
/// scale and amplifying it would only raise the noise floor.
pub fn normalize_peak(block: &mut AudioBlock) {
    let peak = block.peak();
    if peak <= 0.0 {
        return;
    }

    let gain = TARGET_PEAK / peak;
    for channel in &mut block.channels {
        for sample in channel.iter_mut() {
            *sample *= gain;
        }
    }
}
