//! # Persistence Gateway
//!
//! The contract between the tracker and durable storage.
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Slot, Whole List                                 │
//! │                                                                         │
//! │  every mutation ──► save(items) ──► slot["data"] = JSON array          │
//! │                                      (previous value replaced)          │
//! │                                                                         │
//! │  app start ───────► load() ────────► Some(items) | None (first run)    │
//! │                                                                         │
//! │  clear all ───────► clear() ───────► every key in the namespace gone   │
//! │                                                                         │
//! │  There is no delta persistence: the slot always holds the full list.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! ```json
//! [{"id":0,"name":"Egg","calories":300},{"id":1,"name":"Rice","calories":500}]
//! ```

use std::collections::HashSet;

use calorie_core::Item;
use tracing::warn;

use crate::error::{DbError, DbResult};

/// The fixed key the item snapshot is stored under.
pub const ITEMS_KEY: &str = "data";

/// Durable storage for the item list.
///
/// ## Consistency
/// Implementations complete `save` before returning: once the future
/// resolves, a subsequent `load` (even from a new process) sees the new list.
/// The tracker awaits every `save` before it renders the mutation.
///
/// ## Clear Blast Radius
/// `clear` wipes the **entire** namespace, not just [`ITEMS_KEY`]. Anything
/// else stored alongside the snapshot is lost with it.
#[allow(async_fn_in_trait)]
pub trait PersistenceGateway {
    /// Replaces the stored snapshot with `items`.
    async fn save(&self, items: &[Item]) -> DbResult<()>;

    /// Reads the stored snapshot; `None` when nothing was ever saved.
    async fn load(&self) -> DbResult<Option<Vec<Item>>>;

    /// Erases all durable state in the namespace.
    async fn clear(&self) -> DbResult<()>;
}

/// Encodes items as the snapshot JSON array.
pub fn encode_items(items: &[Item]) -> DbResult<String> {
    serde_json::to_string(items).map_err(|e| DbError::Internal(e.to_string()))
}

/// Decodes a snapshot JSON array.
///
/// Calorie counts are range-checked while decoding. An id with no successor
/// (`u64::MAX`) is rejected, since the store could not continue numbering
/// after it. Duplicate ids are logged and kept: the store resolves them with
/// last-match-wins lookups.
pub fn decode_items(raw: &str) -> DbResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.id.next().is_none() {
            return Err(DbError::CorruptSnapshot(format!(
                "item id {} is out of range",
                item.id
            )));
        }
        if !seen.insert(item.id) {
            warn!(id = %item.id, "Duplicate item id in stored snapshot");
        }
    }

    Ok(items)
}
