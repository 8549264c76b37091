//! # Tracker Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CALORIE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use calorie_core::RemovalPolicy;
use directories::ProjectDirs;
use tracing::warn;

/// Default log filter when neither `RUST_LOG` nor `CALORIE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,calorie=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding the item snapshot.
    pub database_path: PathBuf,

    /// How deletes locate their item.
    pub removal_policy: RemovalPolicy,

    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Database: `<platform data dir>/calories.db`, or `./calories.db`
    ///   when no home directory can be determined
    /// - Removal: by id
    /// - Logging: `DEFAULT_LOG_FILTER`
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path()
                .unwrap_or_else(|| PathBuf::from("calories.db")),
            removal_policy: RemovalPolicy::ById,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CALORIE_DB_PATH`: Override the database file
    /// - `CALORIE_REMOVAL_POLICY`: `by_id` or `positional`
    /// - `CALORIE_LOG`: Override the log filter
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Creates a config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("CALORIE_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("CALORIE_REMOVAL_POLICY") {
            match parse_removal_policy(&raw) {
                Some(policy) => config.removal_policy = policy,
                None => warn!(value = %raw, "Unknown CALORIE_REMOVAL_POLICY, using by_id"),
            }
        }

        if let Some(filter) = lookup("CALORIE_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Config for an isolated in-memory session (tests, demos).
    pub fn in_memory() -> Self {
        AppConfig {
            database_path: PathBuf::from(":memory:"),
            ..AppConfig::default()
        }
    }

    /// Checks if the database lives in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == ":memory:"
    }
}

/// Parses a removal policy name.
pub fn parse_removal_policy(raw: &str) -> Option<RemovalPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "by_id" | "by-id" | "id" => Some(RemovalPolicy::ById),
        "positional" | "position" => Some(RemovalPolicy::Positional),
        _ => None,
    }
}

/// Platform data directory path for the database file.
///
/// - **macOS**: `~/Library/Application Support/com.calorie.tracker/calories.db`
/// - **Windows**: `%APPDATA%\calorie\tracker\data\calories.db`
/// - **Linux**: `~/.local/share/tracker/calories.db`
fn default_database_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "calorie", "tracker").map(|dirs| dirs.data_dir().join("calories.db"))
}
