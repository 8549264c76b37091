//! # Error Types
//!
//! Domain-specific error types for calorie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calorie-core errors (this file)                                       │
//! │  ├── CoreError        - Store state / selection failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  calorie-db errors (separate crate)                                    │
//! │  └── DbError          - Persistence failures                           │
//! │                                                                         │
//! │  Tracker errors (in app)                                               │
//! │  └── ApiError         - What the presentation surface sees             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Surface                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Errors
//! Some conditions are deliberately reported as `None` instead:
//! - `find_by_id` / `remove` on an id that is not in the store
//! - hydrating from an absent snapshot

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Item store errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An update or delete was requested while nothing is selected.
    ///
    /// ## When This Occurs
    /// - `update` called before any `set_current`
    /// - `update` called after the selection was explicitly reset
    #[error("No item is selected for editing")]
    NoSelection,

    /// The selected item is no longer in the store.
    ///
    /// ## When This Occurs
    /// ```text
    /// set_current(Some(3))
    ///      │
    ///      ▼
    /// remove(3) / clear_all()   ← selection is not reset automatically
    ///      │
    ///      ▼
    /// update(..) → StaleSelection(3)
    /// ```
    #[error("Selected item {0} no longer exists")]
    StaleSelection(ItemId),

    /// Item cannot be found.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// No id is left to assign, or a loaded id has no successor.
    #[error("Item ids exhausted at {0}")]
    IdsExhausted(ItemId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., calories with no leading digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
