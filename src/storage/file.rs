//! JSON flat-file backend.
//!
//! Writes go to a `.tmp` sibling which is flushed and renamed over the
//! target, so a reader sees either the old document or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{Storage, StorageError};
use crate::models::Snapshot;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    async fn write_atomic(&self, content: &[u8]) -> Result<(), StorageError> {
        let temp_path = self.path.with_extension("tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(parent, e))?;
        }

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| self.io_error(&temp_path, e))?;
        file.write_all(content)
            .await
            .map_err(|e| self.io_error(&temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| self.io_error(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error(&self.path, e))
    }
}

#[async_trait]
impl Storage for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Snapshot, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                location: self.path.display().to_string(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Data file missing, creating default");
                let snapshot = Snapshot::default();
                self.save(&snapshot).await?;
                Ok(snapshot)
            }
            Err(e) => Err(self.io_error(&self.path, e)),
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(snapshot).map_err(StorageError::Serialize)?;
        self.write_atomic(&content).await
    }
}
