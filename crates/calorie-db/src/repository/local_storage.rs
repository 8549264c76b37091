//! # Local Storage Repository
//!
//! A string key-value namespace in SQLite. The item snapshot is one entry in
//! it, under [`ITEMS_KEY`].
//!
//! ## Table Layout
//! ```text
//! ┌──────────┬─────────────────────────────────────────────┬──────────────┐
//! │ key (PK) │ value                                       │ updated_at   │
//! ├──────────┼─────────────────────────────────────────────┼──────────────┤
//! │ data     │ [{"id":0,"name":"Egg","calories":300},...]  │ 2026-10-18.. │
//! └──────────┴─────────────────────────────────────────────┴──────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use calorie_core::Item;

use crate::error::DbResult;
use crate::gateway::{decode_items, encode_items, PersistenceGateway, ITEMS_KEY};

/// Repository for the `local_storage` table.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    pool: SqlitePool,
}

impl LocalStorageRepository {
    /// Creates a new LocalStorageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorageRepository { pool }
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing storage slot");

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reads the value under `key`.
    pub async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM local_storage WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Deletes the value under `key`.
    ///
    /// ## Returns
    /// `true` if a value was removed.
    pub async fn remove_item(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every key in the namespace, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

impl PersistenceGateway for LocalStorageRepository {
    async fn save(&self, items: &[Item]) -> DbResult<()> {
        let json = encode_items(items)?;
        self.set_item(ITEMS_KEY, &json).await?;

        debug!(count = items.len(), "Item snapshot saved");
        Ok(())
    }

    async fn load(&self) -> DbResult<Option<Vec<Item>>> {
        let Some(raw) = self.get_item(ITEMS_KEY).await? else {
            debug!("No item snapshot stored yet");
            return Ok(None);
        };

        let items = decode_items(&raw)?;
        debug!(count = items.len(), "Item snapshot loaded");
        Ok(Some(items))
    }

    async fn clear(&self) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM local_storage")
            .execute(&self.pool)
            .await?;

        info!(keys = result.rows_affected(), "Local storage cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
