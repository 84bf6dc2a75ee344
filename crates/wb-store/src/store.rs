//! WAV artifact store

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use uuid::Uuid;
use wb_core::AudioBlock;

use crate::{StoreError, StoreResult};

/// Handle to one persisted artifact
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactHandle {
    pub filename: String,
    pub size_bytes: u64,
    pub created: DateTime<Utc>,
}

/// Directory-backed store of decoded WAV files
///
/// Names carry a wall-clock timestamp for human sortability plus a
/// random token, so concurrent saves within the same second still get
/// distinct files.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Open (and create if needed) the storage directory
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a block as a 16-bit PCM WAV and return its handle
    pub fn save(&self, block: &AudioBlock) -> StoreResult<ArtifactHandle> {
        let token = Uuid::new_v4().simple().to_string();
        let filename = format!(
            "decoded_audio_{}_{}.wav",
            Utc::now().timestamp(),
            &token[..8]
        );
        let path = self.dir.join(&filename);

        let spec = hound::WavSpec {
            channels: block.num_channels() as u16,
            sample_rate: block.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(&path, spec)?;
        for i in 0..block.num_frames() {
            for ch in &block.channels {
                let sample = (ch[i].clamp(-1.0, 1.0) * 32767.0) as i16;
                writer.write_sample(sample)?;
            }
        }
        writer.finalize()?;

        let metadata = std::fs::metadata(&path)?;
        let created = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        info!(
            "saved artifact {filename} ({} bytes, {} Hz)",
            metadata.len(),
            block.sample_rate
        );

        Ok(ArtifactHandle {
            filename,
            size_bytes: metadata.len(),
            created,
        })
    }

    /// Read back a stored artifact's bytes
    pub fn retrieve(&self, filename: &str) -> StoreResult<Vec<u8>> {
        let path = self.checked_path(filename)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        Ok(std::fs::read(path)?)
    }

    /// Handles for every stored artifact, in no particular order
    pub fn list(&self) -> StoreResult<Vec<ArtifactHandle>> {
        let mut handles = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(".wav") {
                continue;
            }

            let metadata = entry.metadata()?;
            let created = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            handles.push(ArtifactHandle {
                filename: name,
                size_bytes: metadata.len(),
                created,
            });
        }

        Ok(handles)
    }

    // A requested name must stay inside the storage directory.
    fn checked_path(&self, filename: &str) -> StoreResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(StoreError::InvalidName(filename.to_string()));
        }
        Ok(self.dir.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_block() -> AudioBlock {
        let samples: Vec<f32> = (0..2205).map(|i| (i as f32 * 0.01).sin() * 0.5).collect();
        AudioBlock::from_mono(samples, 22050)
    }

    #[test]
    fn test_save_and_retrieve() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let handle = store.save(&test_block()).unwrap();

        assert!(handle.filename.starts_with("decoded_audio_"));
        assert!(handle.filename.ends_with(".wav"));
        assert!(handle.size_bytes > 0);

        let bytes = store.retrieve(&handle.filename).unwrap();
        assert_eq!(bytes.len() as u64, handle.size_bytes);
        // RIFF magic
        assert_eq!(&bytes[..4], b"RIFF");
    }

    #[test]
    fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        let block = test_block();

        let a = store.save(&block).unwrap();
        let b = store.save(&block).unwrap();

        assert_ne!(a.filename, b.filename);
    }

    #[test]
    fn test_missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.retrieve("decoded_audio_0_deadbeef.wav"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_traversal_names_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        for name in ["../etc/passwd", "a/b.wav", "..", ""] {
            assert!(
                matches!(store.retrieve(name), Err(StoreError::InvalidName(_))),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_list_sees_saved_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        let block = test_block();

        let a = store.save(&block).unwrap();
        let b = store.save(&block).unwrap();

        let mut names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|h| h.filename)
            .collect();
        names.sort();

        let mut expected = vec![a.filename, b.filename];
        expected.sort();
        assert_eq!(names, expected);
    }
}
