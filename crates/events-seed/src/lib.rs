//! # events-seed
//!
//! Populates the store with a fixed set of users, events and registrations
//! plus randomized filler generated with `fake`.
//!
//! ```bash
//! SEED_USERS=10 SEED_EVENTS=10 cargo run -p events-seed
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod fixtures;
pub mod seeder;

pub use config::SeedConfig;
pub use error::{SeedError, SeedResult};
pub use seeder::{SeedReport, Seeder};
