use std::sync::Arc;

use wb_codec::{PcmCodec, share};
use wb_server::{DecodeState, WbConfig, decode_router, init_tracing, serve};
use wb_store::ArtifactStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = WbConfig::load("0.0.0.0:8001")?;
    tracing::info!(
        listen_addr = %cfg.listen_addr,
        artifact_dir = %cfg.artifact_dir.display(),
        delivery_sample_rate = cfg.delivery_sample_rate,
        "decode-server boot"
    );
    tracing::warn!("no external model wired in; serving the PCM reference codec");

    let codec = share(PcmCodec::new(cfg.native_sample_rate, cfg.bandwidth));
    let store = Arc::new(ArtifactStore::new(&cfg.artifact_dir)?);
    let state = DecodeState {
        cfg: Arc::new(cfg),
        codec,
        store,
    };

    let listen_addr = state.cfg.listen_addr.clone();
    serve(&listen_addr, decode_router(state)).await?;
    Ok(())
}
