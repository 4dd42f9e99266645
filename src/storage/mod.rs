//! Persistence for the full set of collections.
//!
//! Every backend implements the same load/save contract over a [`Snapshot`].
//! A backend with no persisted state yet synthesizes an empty snapshot on
//! first load and persists it immediately.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StorageBackend;
use crate::models::Snapshot;

pub mod file;
pub mod memory;
pub mod postgres;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored data in {location} is not a valid snapshot: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("storage unavailable after {attempts} attempts: {source}")]
    Unavailable {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn load(&self) -> Result<Snapshot, StorageError>;

    /// Replaces the persisted state. A failed save leaves the previous
    /// state readable.
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// Opens the configured backend. For PostgreSQL this performs the bounded
/// connection retry and runs migrations.
pub async fn open(backend: &StorageBackend) -> Result<Arc<dyn Storage>, StorageError> {
    let store: Arc<dyn Storage> = match backend {
        StorageBackend::File(path) => Arc::new(FileStore::new(path.clone())),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::Postgres(url) => Arc::new(PgStore::connect(url).await?),
    };

    // Touch the store once so a fresh backend writes its default snapshot
    // before the first request.
    store.load().await?;
    tracing::info!(backend = store.backend(), "Storage ready");

    Ok(store)
}
