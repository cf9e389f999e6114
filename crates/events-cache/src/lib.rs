//! # events-cache
//!
//! Redis layer backing login sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: managed Redis connection pool with deadpool
//! - **Session Store**: `SessionStore` implementation keyed by session id,
//!   with a per-user index so every session of a user can be revoked at once
//!
//! ## Example
//!
//! ```ignore
//! use events_cache::{RedisPool, RedisPoolConfig, RedisSessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = RedisSessionStore::new(pool);
//! sessions.create(&session).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    RedisPool, RedisPoolConfig, RedisPoolError, RedisResult,
};

// Re-export session types
pub use session::RedisSessionStore;
