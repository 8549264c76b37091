//! # Calorie Tracker Library
//!
//! Orchestration layer of the calorie tracker. Front ends implement
//! [`PresentationSurface`] and drive a [`Tracker`] built by [`launch`].
//!
//! ## Module Organization
//! ```text
//! calorie_tracker/
//! ├── lib.rs          ◄─── You are here (logging & startup)
//! ├── tracker.rs      ◄─── Tracker: store + gateway + surface
//! ├── surface.rs      ◄─── PresentationSurface trait, ItemInput
//! ├── config.rs       ◄─── AppConfig (env overrides, data dir)
//! └── error.rs        ◄─── API error type for tracker operations
//! ```
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PresentationSurface (front end)                                        │
//! │        │ item_input()                  ▲ add/update/delete row, total   │
//! │        ▼                               │                                │
//! │  Tracker ──────────────────────────────┘                                │
//! │        │                    │                                           │
//! │        ▼                    ▼                                           │
//! │  ItemStore             PersistenceGateway                               │
//! │  (calorie-core)        (calorie-db: SQLite local_storage / memory)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod surface;
pub mod tracker;

pub use config::{AppConfig, DEFAULT_LOG_FILTER};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use surface::{ItemInput, PresentationSurface};
pub use tracker::Tracker;

use calorie_core::ItemStore;
use calorie_db::{Database, DbConfig, LocalStorageRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=calorie=trace` - Show trace for calorie crates only
/// - Otherwise `filter` (usually [`AppConfig::log_filter`])
///
/// Calling it again once a subscriber is installed does nothing.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Opens storage and returns a hydrated, rendered tracker.
///
/// ## Startup Sequence
/// 1. Install logging from `config.log_filter` (see [`init_tracing`])
/// 2. Create the data directory (file databases only)
/// 3. Connect to SQLite & run migrations
/// 4. Build the store with the configured removal policy
/// 5. `Tracker::init`: load the snapshot, render list and total
///
/// Usually called with [`AppConfig::from_env`].
pub async fn launch<S: PresentationSurface>(
    config: &AppConfig,
    surface: S,
) -> ApiResult<Tracker<LocalStorageRepository, S>> {
    init_tracing(&config.log_filter);

    info!(path = %config.database_path.display(), "Starting calorie tracker");

    if !config.is_in_memory() {
        if let Some(dir) = config.database_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                ApiError::internal(format!("Could not create data directory: {}", e))
            })?;
        }
    }

    let db_config = if config.is_in_memory() {
        DbConfig::in_memory()
    } else {
        DbConfig::new(config.database_path.clone())
    };
    let db = Database::new(db_config).await?;

    let store = ItemStore::with_policy(config.removal_policy);
    let mut tracker = Tracker::new(store, db.local_storage(), surface);
    tracker.init().await?;

    Ok(tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::{Item, ItemId};

    #[derive(Default)]
    struct NullSurface {
        input: ItemInput,
        rows: Vec<Item>,
        total: i64,
        hidden: bool,
    }

    impl PresentationSurface for NullSurface {
        fn item_input(&self) -> ItemInput {
            self.input.clone()
        }
        fn populate_item_list(&mut self, items: &[Item]) {
            self.rows = items.to_vec();
            self.hidden = false;
        }
        fn add_list_item(&mut self, item: &Item) {
            self.rows.push(item.clone());
            self.hidden = false;
        }
        fn update_list_item(&mut self, item: &Item) {
            for row in self.rows.iter_mut().filter(|r| r.id == item.id) {
                *row = item.clone();
            }
        }
        fn delete_list_item(&mut self, id: ItemId) {
            self.rows.retain(|r| r.id != id);
        }
        fn clear_list(&mut self) {
            self.rows.clear();
        }
        fn hide_list(&mut self) {
            self.hidden = true;
        }
        fn show_total_calories(&mut self, total: i64) {
            self.total = total;
        }
        fn clear_input(&mut self) {
            self.input = ItemInput::default();
        }
        fn fill_edit_form(&mut self, item: &Item) {
            self.input = ItemInput::new(item.name.clone(), item.calories.to_string());
        }
        fn show_edit_state(&mut self) {}
        fn clear_edit_state(&mut self) {}
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(DEFAULT_LOG_FILTER);
        init_tracing("debug");
    }

    #[tokio::test]
    async fn test_launch_in_memory() {
        let mut tracker = launch(&AppConfig::in_memory(), NullSurface::default())
            .await
            .unwrap();

        assert!(tracker.surface().hidden);
        assert_eq!(tracker.surface().total, 0);

        tracker.surface_mut().input = ItemInput::new("Egg", "300");
        tracker.submit_item().await.unwrap();

        assert_eq!(tracker.surface().rows.len(), 1);
        assert_eq!(tracker.surface().total, 300);
        assert!(!tracker.surface().hidden);
    }

    #[tokio::test]
    async fn test_launch_reopens_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("nested").join("calories.db"),
            ..AppConfig::in_memory()
        };

        {
            let mut tracker = launch(&config, NullSurface::default()).await.unwrap();
            tracker.surface_mut().input = ItemInput::new("Rice", "500");
            tracker.submit_item().await.unwrap();
        }

        let tracker = launch(&config, NullSurface::default()).await.unwrap();
        assert_eq!(tracker.surface().rows.len(), 1);
        assert_eq!(tracker.surface().total, 500);
        assert!(config.database_path.exists());
    }
}
