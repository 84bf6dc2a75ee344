//! wb-server: The two WaveBridge HTTP services
//!
//! `encode-server` accepts raw audio uploads and returns serialized
//! frame payloads; `decode-server` accepts those payloads and turns
//! them back into stored, downloadable WAV artifacts. The services
//! share no state and communicate only through the wire protocol of
//! wb-protocol.

mod config;
mod error;
mod logging;
mod pipeline;
mod routes;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use pipeline::*;
pub use routes::*;
