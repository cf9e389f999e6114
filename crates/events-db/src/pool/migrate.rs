//! Schema migrations
//!
//! Migrations are plain SQL files loaded at runtime from a directory, so the
//! binaries do not need a database at compile time.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::Path;
use tracing::info;

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Failed to load migrations from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: MigrateError,
    },

    #[error("Failed to apply migrations: {0}")]
    Apply(#[from] MigrateError),
}

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrationError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir)
        .await
        .map_err(|source| MigrationError::Load {
            path: dir.display().to_string(),
            source,
        })?;

    info!(
        path = %dir.display(),
        migrations = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await?;

    Ok(())
}
