//! # Repository Module
//!
//! SQLite repository implementations for the calorie tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tracker                                                                │
//! │       │                                                                 │
//! │       │  gateway.save(store.list())                                     │
//! │       ▼                                                                 │
//! │  LocalStorageRepository  (impl PersistenceGateway)                      │
//! │  ├── set_item(&self, key, value)                                        │
//! │  ├── get_item(&self, key)                                               │
//! │  ├── remove_item(&self, key)                                            │
//! │  └── clear(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  local_storage table                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`local_storage::LocalStorageRepository`] - Key-value namespace holding the item snapshot

pub mod local_storage;
