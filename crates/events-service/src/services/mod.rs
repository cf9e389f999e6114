//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a
//! request and orchestrates repository calls.

pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod registration;
pub mod user;

pub use auth::{AuthService, AuthenticatedUser};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use registration::RegistrationService;
pub use user::UserService;

use events_core::{DomainError, User};

/// Fail with `AdminRequired` unless `actor` is an administrator
pub(crate) fn require_admin(actor: &User) -> Result<(), DomainError> {
    if actor.is_admin {
        Ok(())
    } else {
        Err(DomainError::AdminRequired)
    }
}
