//! # events-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `events-core`:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use events_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//! use events_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let users = PgUserRepository::new(pool);
//!     let everyone = users.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgEventRepository, PgRegistrationRepository, PgUserRepository};
