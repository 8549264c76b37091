//! # calorie-core: Pure Item Store for the Calorie Tracker
//!
//! This crate is the **data authority** of the calorie tracker. It owns the
//! in-memory list of food items, the edit selection and the running total,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Calorie Tracker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Surface                           │   │
//! │  │    Item form ──► Item list ──► Edit state ──► Total display     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw (name, calories) input             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tracker (orchestrator)                       │   │
//! │  │    submit_item, begin_edit, submit_update, submit_delete       │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼─────────────────┐  ┌─────────▼────────────────────┐  │
//! │  │   ★ calorie-core (THIS) ★      │  │  calorie-db                  │  │
//! │  │   ItemStore, Item, Calories    │  │  PersistenceGateway          │  │
//! │  │   NO I/O • NO DATABASE         │  │  (local_storage slot)        │  │
//! │  └────────────────────────────────┘  └──────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemId, Calories)
//! - [`store`] - The `ItemStore` with CRUD, selection and totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and calorie parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use calorie_core::{ItemId, ItemStore};
//!
//! let mut store = ItemStore::new();
//! store.add("Egg", "300").unwrap();
//! store.add("Rice", 500_i64).unwrap();
//! assert_eq!(store.total_calories(), 800);
//!
//! store.set_current(Some(ItemId::new(0)));
//! store.update("Egg Large", "350").unwrap();
//! assert_eq!(store.total_calories(), 850);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use store::{ItemStore, RemovalPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest calorie count accepted for a single item.
///
/// ## Business Reason
/// Catches typos such as an extra zero or two; no single food entry in a
/// day log comes close to this.
pub const MAX_ITEM_CALORIES: i64 = 100_000;

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 120;
