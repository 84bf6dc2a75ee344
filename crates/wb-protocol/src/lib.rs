//! wb-protocol: Frame model and wire codec
//!
//! The quantized output of the neural codec travels between the encode
//! and decode services as flattened JSON payloads. This crate owns the
//! canonical in-memory frame representation, the transport-safe
//! serialized form, and the validation applied when reconstructing
//! frames on the receiving side.
//!
//! The single most important compatibility contract lives here: codes
//! are flattened in quantizer-major, then channel, then time order, and
//! both services must agree on it bit for bit.

mod error;
mod frame;
mod wire;

pub use error::*;
pub use frame::*;
pub use wire::*;
