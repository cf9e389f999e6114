//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EventId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("User {user_id} is not registered for event {event_id}")]
    RegistrationNotFound { user_id: UserId, event_id: EventId },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Administrator privileges required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User {user_id} is already registered for event {event_id}")]
    RegistrationAlreadyExists { user_id: UserId, event_id: EventId },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::RegistrationNotFound { .. } => "UNKNOWN_REGISTRATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RegistrationAlreadyExists { .. } => "ALREADY_REGISTERED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::EventNotFound(_) | Self::RegistrationNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::WeakPassword(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::RegistrationAlreadyExists { .. }
        )
    }
}
