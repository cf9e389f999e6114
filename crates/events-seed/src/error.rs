//! Seeding errors

use events_common::AppError;
use events_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// A fixed registration refers to a row position that does not exist
    #[error("missing {entity} fixture at index {index} ({available} available)")]
    MissingFixture {
        entity: &'static str,
        index: usize,
        available: usize,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("password hashing failed: {0}")]
    Password(#[from] AppError),
}

pub type SeedResult<T> = Result<T, SeedError>;
