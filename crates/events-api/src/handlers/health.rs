//! Health check handlers
//!
//! Liveness and readiness probes plus the legacy `/ping`.

use axum::{extract::State, http::StatusCode, Json};
use events_service::{HealthResponse, MessageResponse, ReadinessResponse};

use crate::state::AppState;

/// Body message of `/ping`
pub const PING_MESSAGE: &str = "API működik";

/// GET /ping
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new(PING_MESSAGE))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    let db_healthy = ctx.pool().acquire().await.is_ok();
    let redis_healthy = ctx.session_store().health_check().await;

    let response = ReadinessResponse::ready(db_healthy, redis_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
