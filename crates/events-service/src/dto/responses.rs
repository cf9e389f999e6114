//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are emitted
//! as JSON numbers.

use chrono::{DateTime, Utc};
use events_core::{EventId, EventTiming, RegistrationStatus, UserId};
use serde::Serialize;

/// Plain message body, e.g. `{"message": "pong"}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Issued bearer token plus the signed-in user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// Domain Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
    /// `upcoming` or `past` at the time of the response
    pub status: EventTiming,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub user_id: UserId,
    pub event_id: EventId,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
