//! wb-dsp: Post-processing for reassembled decoder output
//!
//! Two fixed stages run between reassembly and persistence: resampling
//! to the delivery rate and peak normalization. Both are pure
//! functions of their input; nothing here keeps state across requests.

mod error;
mod normalize;
mod resample;

pub use error::*;
pub use normalize::*;
pub use resample::*;
