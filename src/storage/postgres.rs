//! Document-store backend on PostgreSQL.
//!
//! Each collection is one JSONB document in the `documents` table. A save
//! upserts every collection inside a single transaction.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;

use super::{Storage, StorageError};
use crate::models::Snapshot;

pub const CONNECT_ATTEMPTS: u32 = 5;
const MAX_BACKOFF_MS: u64 = 10_000;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Wait before the next attempt after `attempt` (1-based) failed.
pub fn backoff_delay(attempt: u32) -> Duration {
    let exp = attempt.saturating_sub(1).min(16);
    let millis = 1000u64.saturating_mul(1u64 << exp).min(MAX_BACKOFF_MS);
    Duration::from_millis(millis)
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects with bounded exponential backoff, then runs migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = connect_with_retry(database_url, CONNECT_ATTEMPTS).await?;

        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Migrations run successfully");

        Ok(Self { pool })
    }
}

async fn connect_with_retry(database_url: &str, attempts: u32) -> Result<PgPool, StorageError> {
    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => {
                tracing::info!(attempt, "Successfully connected to database");
                return Ok(pool);
            }
            Err(source) if attempt >= attempts => {
                tracing::error!(error = %source, "All connection attempts failed");
                return Err(StorageError::Unavailable { attempts, source });
            }
            Err(e) => {
                let wait = backoff_delay(attempt);
                tracing::warn!(
                    attempt,
                    error = %e,
                    wait_ms = wait.as_millis() as u64,
                    "Database connection attempt failed"
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}

fn collections(snapshot: &Snapshot) -> Result<Vec<(&'static str, Value)>, serde_json::Error> {
    Ok(vec![
        ("event", serde_json::to_value(&snapshot.event)?),
        ("trash", serde_json::to_value(&snapshot.trash)?),
        ("notifications", serde_json::to_value(&snapshot.notifications)?),
        ("latest", serde_json::to_value(&snapshot.latest)?),
        ("registration", serde_json::to_value(&snapshot.registration)?),
        ("summary", serde_json::to_value(&snapshot.summary)?),
    ])
}

/// Assembles per-collection rows into a snapshot. `None` means the table
/// holds nothing yet.
fn decode_documents<I>(rows: I) -> Result<Option<Snapshot>, StorageError>
where
    I: IntoIterator<Item = (String, Value)>,
{
    let document: Map<String, Value> = rows.into_iter().collect();
    if document.is_empty() {
        return Ok(None);
    }

    serde_json::from_value(Value::Object(document))
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            location: "documents".to_string(),
            source,
        })
}

#[async_trait]
impl Storage for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn load(&self) -> Result<Snapshot, StorageError> {
        let rows: Vec<(String, Json<Value>)> =
            sqlx::query_as("SELECT collection, body FROM documents")
                .fetch_all(&self.pool)
                .await?;

        let rows = rows.into_iter().map(|(collection, Json(body))| (collection, body));
        match decode_documents(rows)? {
            Some(snapshot) => Ok(snapshot),
            None => {
                tracing::info!("No stored documents, creating default collections");
                let snapshot = Snapshot::default();
                self.save(&snapshot).await?;
                Ok(snapshot)
            }
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let documents = collections(snapshot).map_err(StorageError::Serialize)?;

        let mut tx = self.pool.begin().await?;
        for (collection, body) in documents {
            sqlx::query(
                "INSERT INTO documents (collection, body, updated_at) VALUES ($1, $2, now()) \
                 ON CONFLICT (collection) DO UPDATE SET body = EXCLUDED.body, updated_at = now()",
            )
            .bind(collection)
            .bind(Json(body))
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(())
    }
}
