//! Integration test utilities for the events API
//!
//! Two harnesses:
//! - [`TestApp`] drives the router in-process against in-memory stores
//! - [`TestServer`] spawns a real server against PostgreSQL and Redis

pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{MemorySessionStore, MemoryStore};
