//! Seed the database
//!
//! ```bash
//! cargo run -p events-seed
//! ```

use std::sync::Arc;

use anyhow::Context;
use events_common::config::env_or;
use events_common::try_init_tracing;
use events_db::{
    create_pool, run_migrations, DatabaseConfig, PgEventRepository, PgRegistrationRepository,
    PgUserRepository,
};
use events_seed::{SeedConfig, Seeder};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let seed_config = SeedConfig::from_env().context("invalid seed configuration")?;
    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;
    let migrations_path = env_or("MIGRATIONS_PATH", String::from("./migrations"))?;

    let pool = create_pool(&db_config)
        .await
        .context("failed to connect to PostgreSQL")?;
    run_migrations(&pool, &migrations_path).await?;

    let mut seeder = Seeder::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgEventRepository::new(pool.clone())),
        Arc::new(PgRegistrationRepository::new(pool)),
        seed_config,
    );

    let report = seeder.run().await?;
    info!("Seeded {report}");

    Ok(())
}
