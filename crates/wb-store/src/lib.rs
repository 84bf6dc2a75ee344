//! wb-store: Persistence for decoded audio artifacts
//!
//! A decode request ends in exactly one saved WAV file with a unique,
//! retrievable name. Artifacts are immutable after creation and
//! retained indefinitely; deletion is out of scope.

mod error;
mod store;

pub use error::*;
pub use store::*;
