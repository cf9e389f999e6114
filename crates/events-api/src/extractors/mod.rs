//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed paths.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, RequireAdmin};
pub use path::{EventPath, EventUserPath, UserPath};
pub use query::QueryParams;
pub use validated::ValidatedJson;
