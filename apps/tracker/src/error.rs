//! # API Error Type
//!
//! Unified error type returned by tracker operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Tracker                            │
//! │                                                                         │
//! │  Tracker operation: Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ├── Persistence failed? ── DbError::QueryFailed(..) ──┐         │
//! │         │                                                     │         │
//! │         ├── Bad input? ─────────── ValidationError ───────────┤         │
//! │         │                                                     ▼         │
//! │         ├── Nothing selected? ──── CoreError::NoSelection ─► ApiError   │
//! │         │                                                               │
//! │         └── Success ───────────────────────────────────────────────►    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Presentation surfaces receive a machine-readable `code` and a
//! human-readable `message`:
//! ```json
//! { "code": "INVALID_STATE", "message": "No item is selected for editing" }
//! ```

use calorie_core::{CoreError, ValidationError};
use calorie_db::DbError;
use serde::Serialize;

/// Error returned from tracker operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Operation not valid for the current selection
    InvalidState,

    /// Persistence failed
    DatabaseError,

    /// Internal error
    Internal,
}

/// Result type for tracker operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidState, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts persistence errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::CorruptSnapshot(e) => {
                tracing::error!("Stored items could not be read: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Saved items could not be read")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoSelection => ApiError::invalid_state(err.to_string()),
            CoreError::StaleSelection(_) => ApiError::invalid_state(err.to_string()),
            CoreError::ItemNotFound(id) => ApiError::not_found("Item", &id.to_string()),
            CoreError::IdsExhausted(_) => ApiError::invalid_state(err.to_string()),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::ItemId;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CoreError::NoSelection);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "INVALID_STATE");
        assert_eq!(json["message"], "No item is selected for editing");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ItemNotFound(ItemId::new(9)));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: 9");

        let err = ApiError::from(CoreError::StaleSelection(ItemId::new(2)));
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn test_validation_mapping() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_db_error_hides_details() {
        let err = ApiError::from(DbError::QueryFailed("no such table: local_storage".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
        assert_eq!(err.to_string(), "[DatabaseError] Database operation failed");
    }
}
