//! Error handling utilities for repositories

use events_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Map unique and foreign-key violations of an insert that references other rows.
/// `on_foreign_key` receives the name of the violated constraint.
pub fn map_insert_violation<U, F>(e: SqlxError, on_unique: U, on_foreign_key: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_foreign_key(db_err.constraint());
        }
    }
    map_db_error(e)
}
