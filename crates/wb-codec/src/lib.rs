//! wb-codec: Boundary to the external neural codec
//!
//! The actual neural forward/inverse transform is an external
//! collaborator. This crate owns everything around that black box:
//! the [`AudioCodec`] trait seam, the shared-instance locking
//! discipline, the bandwidth quality setting, splitting long audio
//! into bounded chunks and reassembling decoded chunks in order, and
//! the flat-tensor contract handed to graph-export callers.

mod bandwidth;
mod chunk;
mod error;
mod export;
mod pcm;
mod traits;

pub use bandwidth::*;
pub use chunk::*;
pub use error::*;
pub use export::*;
pub use pcm::*;
pub use traits::*;
