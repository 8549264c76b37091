//! # Item Store
//!
//! The authoritative in-memory collection of items, plus the edit selection
//! and the running calorie total.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Store Operations                                │
//! │                                                                         │
//! │  User Action              Tracker                 Store Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  App start ──────────────► init() ──────────────► hydrate(snapshot)    │
//! │                                                                         │
//! │  Click Add ──────────────► submit_item() ───────► items.push(item)     │
//! │                                                                         │
//! │  Click Edit icon ────────► begin_edit(id) ──────► current = Some(id)   │
//! │                                                                         │
//! │  Click Update ───────────► submit_update() ─────► items[id].name = ..  │
//! │                                                                         │
//! │  Click Delete ───────────► submit_delete() ─────► remove(id)           │
//! │                                                                         │
//! │  Click Clear All ────────► clear_all() ─────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: The store never persists or renders anything itself.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection
//! The selection is an [`ItemId`], not a reference, and is resolved against
//! `items` every time it is used. Removing or clearing items does not reset
//! it; a selection that no longer resolves is reported as
//! [`CoreError::StaleSelection`].

use crate::error::{CoreError, CoreResult};
use crate::types::{IntoCalories, Item, ItemId};

// =============================================================================
// Removal Policy
// =============================================================================

/// How [`ItemStore::remove`] locates the item to delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Remove the item whose `id` field matches.
    #[default]
    ById,

    /// Treat the id as an offset into the list.
    ///
    /// This matches data written by older clients that deleted by position.
    /// It is only correct while every item's id equals its position, which
    /// stops being true after the first deletion:
    /// ```text
    /// items: [0, 1, 2]   remove(0) → [1, 2]
    ///                    remove(2) → offset 2 is past the end, nothing removed
    ///                    remove(1) → removes the item with id 2
    /// ```
    Positional,
}

// =============================================================================
// Item Store
// =============================================================================

/// The item store.
///
/// ## Invariants
/// - Items created by `add` have pairwise distinct ids
/// - Ids handed out by `add` are never handed out again in this store's
///   lifetime (until the next `hydrate`)
/// - `total_calories` is recomputed from `items` on every call
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    /// Items in display order.
    items: Vec<Item>,

    /// Id of the item being edited, if any.
    current: Option<ItemId>,

    /// Lowest id `add` may hand out next.
    next_id: ItemId,

    removal_policy: RemovalPolicy,
}

impl ItemStore {
    /// Creates an empty store that removes items by id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given removal policy.
    pub fn with_policy(removal_policy: RemovalPolicy) -> Self {
        ItemStore {
            removal_policy,
            ..Self::default()
        }
    }

    /// Returns the removal policy.
    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Replaces the whole collection.
    ///
    /// `None` (nothing persisted yet) resets the store to empty. Prior items
    /// are discarded; the selection is left as is.
    ///
    /// ## Errors
    /// `IdsExhausted` if an item carries `u64::MAX`; the store is unchanged.
    pub fn hydrate(&mut self, items: Option<Vec<Item>>) -> CoreResult<()> {
        let items = items.unwrap_or_default();

        let mut next_id = ItemId::default();
        for item in &items {
            let after = item.id.next().ok_or(CoreError::IdsExhausted(item.id))?;
            next_id = next_id.max(after);
        }

        self.items = items;
        self.next_id = next_id;
        Ok(())
    }

    /// Returns the items in display order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item to the end of the list.
    ///
    /// ## Id Assignment
    /// The id is the last item's id + 1, or 0 for an empty store, raised to
    /// the store's high-water mark so a deleted item's id is not reused.
    ///
    /// ## Returns
    /// A handle to the new item, ready to render.
    ///
    /// ## Errors
    /// - `CoreError::Validation` when `calories` does not parse
    /// - `CoreError::IdsExhausted` when no id is left to assign
    pub fn add(&mut self, name: impl Into<String>, calories: impl IntoCalories) -> CoreResult<&Item> {
        let calories = calories.into_calories()?;

        let derived = match self.items.last() {
            Some(last) => last.id.next().ok_or(CoreError::IdsExhausted(last.id))?,
            None => ItemId::default(),
        };
        let id = derived.max(self.next_id);
        self.next_id = id.next().ok_or(CoreError::IdsExhausted(id))?;

        self.items.push(Item::new(id, name, calories));
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Finds an item by id.
    ///
    /// If several items share the id (only possible with hydrated foreign
    /// data), the last one wins.
    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().rev().find(|item| item.id == id)
    }

    /// Records the edit selection. No membership check is made.
    pub fn set_current(&mut self, id: Option<ItemId>) {
        self.current = id;
    }

    /// Returns the raw selection.
    pub fn current_id(&self) -> Option<ItemId> {
        self.current
    }

    /// Resolves the selection; `None` when unset or stale.
    pub fn current(&self) -> Option<&Item> {
        self.current.and_then(|id| self.find_by_id(id))
    }

    /// Applies a new name and calorie count to the selected item.
    ///
    /// The selection is re-resolved by id, so the live item in `items` is
    /// what changes. Every other item is untouched.
    ///
    /// ## Errors
    /// - `NoSelection` when nothing is selected
    /// - `StaleSelection` when the selected id is no longer present
    /// - `Validation` when `calories` does not parse
    pub fn update(&mut self, name: impl Into<String>, calories: impl IntoCalories) -> CoreResult<&Item> {
        let id = self.current.ok_or(CoreError::NoSelection)?;
        let calories = calories.into_calories()?;
        let name = name.into();

        let mut found = None;
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.id == id {
                item.name.clone_from(&name);
                item.calories = calories;
                found = Some(index);
            }
        }

        match found {
            Some(index) => Ok(&self.items[index]),
            None => Err(CoreError::StaleSelection(id)),
        }
    }

    /// Removes an item according to the store's [`RemovalPolicy`].
    ///
    /// ## Returns
    /// The removed item, or `None` when nothing matched (no-op).
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = match self.removal_policy {
            RemovalPolicy::ById => self.items.iter().position(|item| item.id == id)?,
            RemovalPolicy::Positional => {
                let offset = usize::try_from(id.get()).ok()?;
                if offset >= self.items.len() {
                    return None;
                }
                offset
            }
        };

        Some(self.items.remove(index))
    }

    /// Empties the store. The selection is not touched.
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Sums calories over all items, fresh on every call.
    pub fn total_calories(&self) -> i64 {
        self.items.iter().map(|item| item.calories.count()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
