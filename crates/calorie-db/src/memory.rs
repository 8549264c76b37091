//! # In-Memory Gateway
//!
//! A `PersistenceGateway` backed by a `HashMap`, for tests and sessions that
//! should not touch disk. Uses the same JSON encoding as the SQLite
//! repository, so snapshots are interchangeable.

use std::collections::HashMap;

use calorie_core::Item;
use tokio::sync::Mutex;

use crate::error::DbResult;
use crate::gateway::{decode_items, encode_items, PersistenceGateway, ITEMS_KEY};

/// In-process key-value namespace.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryGateway {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value under `key`.
    pub async fn set_item(&self, key: &str, value: impl Into<String>) {
        self.slots.lock().await.insert(key.to_string(), value.into());
    }

    /// Reads the raw value under `key`.
    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.slots.lock().await.get(key).cloned()
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    /// Checks if the namespace is empty.
    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }
}

impl PersistenceGateway for MemoryGateway {
    async fn save(&self, items: &[Item]) -> DbResult<()> {
        let json = encode_items(items)?;
        self.set_item(ITEMS_KEY, json).await;
        Ok(())
    }

    async fn load(&self) -> DbResult<Option<Vec<Item>>> {
        match self.get_item(ITEMS_KEY).await {
            Some(raw) => decode_items(&raw).map(Some),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> DbResult<()> {
        self.slots.lock().await.clear();
        Ok(())
    }
}
