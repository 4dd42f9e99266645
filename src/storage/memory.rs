use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::models::Snapshot;

/// Process-local backend. State is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Snapshot, StorageError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        *self.snapshot.write().await = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Notification, NotificationType};

    #[tokio::test]
    async fn test_load_returns_copy_of_saved_state() {
        let store = MemoryStore::new();
        assert_eq!(store.load().await.unwrap(), Snapshot::default());

        let mut snapshot = Snapshot::default();
        snapshot
            .notifications
            .push(Notification::new(NotificationType::News, "hello"));
        store.save(&snapshot).await.unwrap();

        let mut loaded = store.load().await.unwrap();
        assert_eq!(loaded, snapshot);

        // Mutating the loaded copy must not leak into the store.
        loaded.notifications.clear();
        assert_eq!(store.load().await.unwrap().notifications.len(), 1);
    }
}
