//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in events-core.

mod error;
mod event;
mod registration;
mod user;

pub use event::PgEventRepository;
pub use registration::PgRegistrationRepository;
pub use user::PgUserRepository;
