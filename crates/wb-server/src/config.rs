//! Service configuration
//!
//! Loaded once at boot from an optional JSON file (path in
//! `WB_CONFIG`, or `wavebridge.config.json` in the working directory)
//! with per-field environment overrides. Everything here is
//! configuration; no business logic depends on how a value arrived.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use wb_codec::Bandwidth;

/// Raw config file shape; every field optional so a partial file works
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WbConfigFile {
    pub listen_addr: Option<String>,
    pub bandwidth_kbps: Option<f32>,
    pub chunk_length: Option<usize>,
    pub native_sample_rate: Option<u32>,
    pub delivery_sample_rate: Option<u32>,
    pub artifact_dir: Option<String>,
    pub public_base_url: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct WbConfig {
    /// Address the HTTP listener binds to
    pub listen_addr: String,
    /// Target bandwidth the codec model is configured for
    pub bandwidth: Bandwidth,
    /// Chunk length, in samples at the native rate, used when splitting
    /// uploads before encoding
    pub chunk_length: usize,
    /// Sample rate the codec model expects and produces
    pub native_sample_rate: u32,
    /// Sample rate of delivered artifacts
    pub delivery_sample_rate: u32,
    /// Where decoded artifacts are stored
    pub artifact_dir: PathBuf,
    /// Base URL used when building download links
    pub public_base_url: String,
}

impl WbConfig {
    /// Load configuration for a service listening on `default_listen`
    /// by default
    pub fn load(default_listen: &str) -> Result<Self, String> {
        let file_cfg = Self::read_file()?;
        Self::resolve(file_cfg, default_listen)
    }

    fn read_file() -> Result<WbConfigFile, String> {
        let path = if let Ok(p) = std::env::var("WB_CONFIG") {
            PathBuf::from(p)
        } else {
            let p = PathBuf::from("wavebridge.config.json");
            if !p.exists() {
                return Ok(WbConfigFile::default());
            }
            p
        };

        Self::read_file_from(&path)
    }

    fn read_file_from(path: &Path) -> Result<WbConfigFile, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        serde_json::from_str(&raw).map_err(|e| format!("Invalid config {}: {e}", path.display()))
    }

    fn resolve(file_cfg: WbConfigFile, default_listen: &str) -> Result<Self, String> {
        let listen_addr = env_or("WB_LISTEN_ADDR", file_cfg.listen_addr)
            .unwrap_or_else(|| default_listen.to_string());

        let bandwidth_kbps = match env_or("WB_BANDWIDTH_KBPS", None) {
            Some(raw) => Some(
                raw.parse::<f32>()
                    .map_err(|e| format!("Invalid WB_BANDWIDTH_KBPS: {e}"))?,
            ),
            None => file_cfg.bandwidth_kbps,
        };
        let bandwidth = match bandwidth_kbps {
            Some(kbps) => Bandwidth::from_kbps(kbps).ok_or_else(|| {
                format!("Unsupported bandwidth {kbps} kbps; valid levels: 1.5, 3, 6, 12, 24")
            })?,
            None => Bandwidth::default(),
        };

        let chunk_length = match env_or("WB_CHUNK_LENGTH", None) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| format!("Invalid WB_CHUNK_LENGTH: {e}"))?,
            None => file_cfg.chunk_length.unwrap_or(45_000),
        };
        if chunk_length == 0 {
            return Err("chunk_length must be positive".to_string());
        }

        let artifact_dir = env_or("WB_ARTIFACT_DIR", file_cfg.artifact_dir)
            .unwrap_or_else(|| "decoded_audio".to_string());

        let public_base_url = env_or("WB_PUBLIC_BASE_URL", file_cfg.public_base_url)
            .unwrap_or_else(|| format!("http://localhost:{}", port_of(&listen_addr)));

        Ok(Self {
            listen_addr,
            bandwidth,
            chunk_length,
            native_sample_rate: file_cfg.native_sample_rate.unwrap_or(24_000),
            delivery_sample_rate: file_cfg.delivery_sample_rate.unwrap_or(22_050),
            artifact_dir: PathBuf::from(artifact_dir),
            public_base_url,
        })
    }
}

fn env_or(key: &str, fallback: Option<String>) -> Option<String> {
    std::env::var(key).ok().or(fallback)
}

fn port_of(listen_addr: &str) -> &str {
    listen_addr.rsplit(':').next().unwrap_or("8000")
}
