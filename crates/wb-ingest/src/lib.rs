//! wb-ingest: Audio-format normalization ahead of the codec
//!
//! The codec only accepts mono PCM at its native rate; uploads arrive
//! as whatever container the client had. Conversion is delegated to an
//! external transcoding tool (ffmpeg) through scratch files that are
//! released on every exit path.

mod error;
mod transcode;

pub use error::*;
pub use transcode::*;
