//! # Database Error Types
//!
//! Error types for the storage gateway and the product service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (shelf-core)      SQLite Error (sqlx::Error)          │
//! │       │                                 │                               │
//! │       │                                 ├── constraint → Constraint    │
//! │       │                                 └── anything else → Storage    │
//! │       ▼                                 ▼                               │
//! │  DbError (this module) ← Three kinds, nothing else                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← Mapped to a status code                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no "not found" variant: lookups return `Option`/`bool`.

use shelf_core::ValidationError;
use thiserror::Error;

/// Errors raised by the product service.
///
/// Nothing here is retried; every variant propagates unchanged to the
/// boundary layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Input failed a field rule before any SQL ran.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Storage rejected the write because of an integrity rule.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose name already exists
    /// - Renaming a product onto an existing name
    #[error("Constraint violated: {constraint}")]
    ConstraintViolation { constraint: String },

    /// Any other persistence failure (connectivity, timeout, busy database,
    /// aborted transaction). Opaque to callers.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl DbError {
    /// Creates a ConstraintViolation error.
    pub fn constraint(constraint: impl Into<String>) -> Self {
        DbError::ConstraintViolation {
            constraint: constraint.into(),
        }
    }

    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        DbError::Storage(message.into())
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (unique / FK / not-null / check) → ConstraintViolation
/// sqlx::Error::PoolTimedOut                             → Storage
/// sqlx::Error::PoolClosed                               → Storage
/// Other                                                 → Storage
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
                    || matches!(db_err.kind(), sqlx::error::ErrorKind::NotNullViolation)
                    // SQLite: "UNIQUE constraint failed: <table>.<column>"
                    || db_err.message().contains("constraint failed")
                {
                    DbError::constraint(constraint_name(db_err.message()))
                } else {
                    DbError::Storage(db_err.message().to_string())
                }
            }

            sqlx::Error::PoolTimedOut => {
                DbError::storage("Timed out waiting for a database connection")
            }

            sqlx::Error::PoolClosed => DbError::storage("Connection pool is closed"),

            _ => DbError::Storage(err.to_string()),
        }
    }
}

/// Extracts the offending column from a SQLite constraint message.
///
/// SQLite reports e.g. `UNIQUE constraint failed: products.product_name`;
/// the part after the colon is kept. Messages without a colon are returned
/// unchanged.
fn constraint_name(message: &str) -> String {
    message
        .split_once("constraint failed: ")
        .map(|(_, column)| column.trim().to_string())
        .unwrap_or_else(|| message.to_string())
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
