//! Request-boundary error mapping
//!
//! Every internal failure surfaces to the client as one JSON body,
//! `{"detail": "<innermost message>"}`, with a 404 only for missing
//! artifacts and a 500 for everything else. No failure is retried and
//! no partial result is ever returned.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use wb_codec::CodecError;
use wb_dsp::DspError;
use wb_ingest::IngestError;
use wb_protocol::ProtocolError;
use wb_store::StoreError;

/// Anything that can fail while serving a request
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Dsp(#[from] DspError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Task failure: {0}")]
    Task(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound(_)) | Self::Store(StoreError::InvalidName(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(%detail, "request failed");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_maps_to_404() {
        let err = ServerError::Store(StoreError::NotFound("x.wav".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_protocol_failure_maps_to_500() {
        let err = ServerError::Protocol(ProtocolError::Shape("bad".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
