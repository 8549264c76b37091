//! # calorie-db: Persistence Layer for the Calorie Tracker
//!
//! This crate provides the durable side of the item store. The whole item
//! list is stored as one JSON snapshot under a fixed key, overwritten on
//! every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Calorie Tracker Data Flow                           │
//! │                                                                         │
//! │  Tracker (after every ItemStore mutation)                               │
//! │       │                                                                 │
//! │       │  gateway.save(store.list())                                     │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   calorie-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │ PersistenceGateway │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │  (gateway.rs)      │  │ (embedded) │  │   │
//! │  │   │               │    │                    │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ LocalStorageRepo   │  │ 001_local_ │  │   │
//! │  │   │               │    │ MemoryGateway      │  │  storage   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  local_storage table:  key = "data"  value = [{"id":0,...}, ...]       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`gateway`] - The `PersistenceGateway` trait and snapshot encoding
//! - [`memory`] - In-process gateway for tests and throwaway sessions
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - SQLite repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use calorie_db::{Database, DbConfig, PersistenceGateway};
//!
//! let db = Database::new(DbConfig::new("path/to/calories.db")).await?;
//! let storage = db.local_storage();
//!
//! storage.save(store.list()).await?;
//! let items = storage.load().await?; // None on first run
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use gateway::{PersistenceGateway, ITEMS_KEY};
pub use memory::MemoryGateway;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::local_storage::LocalStorageRepository;
