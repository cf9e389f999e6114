//! Ports implemented by the infrastructure crates

mod repositories;
mod session_store;

pub use repositories::{
    EventFilter, EventRepository, RegistrationRepository, RepoResult, UserRepository,
};
pub use session_store::SessionStore;
