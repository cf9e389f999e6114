//! # events-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Event, EventChanges, EventTiming, NewEvent, NewRegistration, NewUser, Registration,
    RegistrationStatus, Session, User, UserChanges,
};
pub use error::DomainError;
pub use traits::{
    EventFilter, EventRepository, RegistrationRepository, RepoResult, SessionStore,
    UserRepository,
};
pub use value_objects::{EventId, IdParseError, SessionId, UserId};
