//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use events_cache::{RedisPool, RedisSessionStore};
use events_common::{AppConfig, AppError, JwtService};
use events_db::{
    create_pool, run_migrations, PgEventRepository, PgRegistrationRepository, PgUserRepository,
};
use events_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application without rate limiting (tests, local tooling)
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    apply_middleware(router, &config.cors, config.app.env.is_production()).with_state(state)
}

/// Build the production application: rate limited API, unlimited health probes
///
/// # Errors
/// Returns `AppError::Config` when the rate limit settings are invalid
pub fn create_rate_limited_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Fails when PostgreSQL or Redis cannot be reached or migrations fail
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&events_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!(path = %config.database.migrations_path, "Running migrations...");
        run_migrations(&pool, &config.database.migrations_path)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    info!("Connecting to Redis...");
    let redis_pool = RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    redis_pool
        .health_check()
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection established");

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .registration_repo(Arc::new(PgRegistrationRepository::new(pool)))
        .session_store(Arc::new(RedisSessionStore::new(redis_pool)))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
///
/// # Errors
/// Fails when the address cannot be bound or the server stops with an error
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

/// Run the complete server with configuration
///
/// # Errors
/// Propagates any startup or serving failure
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_rate_limited_app(state)?;
    run_server(app, &addr).await
}
