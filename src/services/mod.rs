use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Snapshot;
use crate::storage::Storage;
use crate::utils::error::AppError;

pub mod feeds;
pub mod lifecycle;
pub mod lookup;
pub mod notifications;

pub use feeds::FeedService;
pub use lifecycle::EventService;

/// Gateway to the store. Every mutation is a load -> modify -> save cycle;
/// cycles are serialized within this process so two requests never
/// interleave their read-modify-write.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn Storage>,
    write_lock: Arc<Mutex<()>>,
}

impl Repository {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn read(&self) -> Result<Snapshot, AppError> {
        Ok(self.store.load().await?)
    }

    /// Runs `f` against a freshly loaded snapshot and saves the result.
    /// Nothing is persisted if `f` fails.
    pub async fn mutate<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.store.load().await?;
        let output = f(&mut snapshot)?;
        self.store.save(&snapshot).await?;
        Ok(output)
    }
}

/// Builds the validation error for a list of missing required fields.
pub(crate) fn missing_fields(fields: &[&str]) -> AppError {
    AppError::ValidationError(format!("Missing required fields: {}", fields.join(", ")))
}
