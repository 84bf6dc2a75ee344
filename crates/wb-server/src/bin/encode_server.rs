use std::sync::Arc;

use wb_codec::{PcmCodec, share};
use wb_server::{EncodeState, WbConfig, encode_router, init_tracing, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = WbConfig::load("0.0.0.0:8000")?;
    tracing::info!(
        listen_addr = %cfg.listen_addr,
        bandwidth_kbps = cfg.bandwidth.as_kbps(),
        chunk_length = cfg.chunk_length,
        "encode-server boot"
    );
    tracing::warn!("no external model wired in; serving the PCM reference codec");

    let codec = share(PcmCodec::new(cfg.native_sample_rate, cfg.bandwidth));
    let state = EncodeState {
        cfg: Arc::new(cfg),
        codec,
    };

    let listen_addr = state.cfg.listen_addr.clone();
    serve(&listen_addr, encode_router(state)).await?;
    Ok(())
}
