//! HTTP routers for the two services

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use wb_codec::SharedCodec;
use wb_store::ArtifactStore;

use crate::{DecodeRequest, ServerError, WbConfig, decode_pipeline, encode_pipeline};

/// Shared state of the encode service
#[derive(Clone)]
pub struct EncodeState {
    pub cfg: Arc<WbConfig>,
    pub codec: SharedCodec,
}

/// Shared state of the decode service
#[derive(Clone)]
pub struct DecodeState {
    pub cfg: Arc<WbConfig>,
    pub codec: SharedCodec,
    pub store: Arc<ArtifactStore>,
}

/// Router of the encode service
pub fn encode_router(state: EncodeState) -> Router {
    Router::new()
        .route("/encode", post(encode))
        .route("/health", get(encode_health))
        .with_state(state)
}

/// Router of the decode service
pub fn decode_router(state: DecodeState) -> Router {
    Router::new()
        .route("/decode", post(decode))
        .route("/download/:filename", get(download))
        .route("/files", get(files))
        .route("/health", get(decode_health))
        .with_state(state)
}

/// Bind and serve a router until process exit
pub async fn serve(listen_addr: &str, app: Router) -> Result<(), String> {
    let addr: SocketAddr = listen_addr
        .parse()
        .map_err(|e| format!("Invalid listen_addr {listen_addr}: {e}"))?;

    tracing::info!(%addr, "HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| e.to_string())?;

    axum::serve(listener, app).await.map_err(|e| e.to_string())
}

// ═══════════════════════════════════════════════════════════════
// POST /encode
// ═══════════════════════════════════════════════════════════════

async fn encode(State(st): State<EncodeState>, body: Bytes) -> Result<Response, ServerError> {
    // The pipeline is CPU-bound and holds the model lock; keep it off
    // the async workers.
    let outcome = tokio::task::spawn_blocking(move || encode_pipeline(&st.cfg, &st.codec, &body))
        .await
        .map_err(|e| ServerError::Task(e.to_string()))??;

    Ok(Json(json!({
        "status": "success",
        "encoded_data": outcome.frames,
        "sample_rate": outcome.sample_rate,
        "channels": outcome.channels,
    }))
    .into_response())
}

async fn encode_health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

// ═══════════════════════════════════════════════════════════════
// POST /decode
// ═══════════════════════════════════════════════════════════════

async fn decode(
    State(st): State<DecodeState>,
    Json(request): Json<DecodeRequest>,
) -> Result<Response, ServerError> {
    let base_url = st.cfg.public_base_url.clone();
    let outcome =
        tokio::task::spawn_blocking(move || decode_pipeline(&st.cfg, &st.codec, &st.store, request))
            .await
            .map_err(|e| ServerError::Task(e.to_string()))??;

    Ok(Json(json!({
        "status": "success",
        "message": format!("Audio decoded successfully from {} chunks", outcome.total_chunks),
        "filename": outcome.handle.filename,
        "download_url": format!("{base_url}/download/{}", outcome.handle.filename),
        "sample_rate": outcome.sample_rate,
        "total_chunks": outcome.total_chunks,
    }))
    .into_response())
}

// ═══════════════════════════════════════════════════════════════
// GET /download/{filename}
// ═══════════════════════════════════════════════════════════════

async fn download(
    State(st): State<DecodeState>,
    Path(filename): Path<String>,
) -> Result<Response, ServerError> {
    let bytes = st.store.retrieve(&filename)?;

    let headers = [
        (header::CONTENT_TYPE, "audio/wav".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

// ═══════════════════════════════════════════════════════════════
// GET /files
// ═══════════════════════════════════════════════════════════════

async fn files(State(st): State<DecodeState>) -> Result<Response, ServerError> {
    let entries: Vec<serde_json::Value> = st
        .store
        .list()?
        .into_iter()
        .map(|h| {
            json!({
                "filename": h.filename,
                "download_url": format!("{}/download/{}", st.cfg.public_base_url, h.filename),
                "size": h.size_bytes,
                "created": h.created,
            })
        })
        .collect();

    Ok(Json(json!({ "files": entries })).into_response())
}

async fn decode_health() -> impl IntoResponse {
    Json(json!({ "status": "healthy", "service": "decode-server" }))
}
