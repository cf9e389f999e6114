//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod registration;
mod user;

pub use event::EventModel;
pub use registration::RegistrationModel;
pub use user::UserModel;
