//! Route definitions
//!
//! Routes are mounted at the root. Access tiers are enforced by the
//! extractors each handler takes: none (public), `AuthUser` or
//! `RequireAdmin`.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, events, health, registrations, users};
use crate::state::AppState;

/// The API router without health probes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::whoami))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(users::get_current_user).put(users::update_current_user),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/upcoming", get(events::upcoming_events))
        .route("/events/past", get(events::past_events))
        .route("/events/filter", get(events::filter_events))
        .route(
            "/events/:event_id",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/events/:event_id/register", post(registrations::register))
        .route(
            "/events/:event_id/unregister",
            delete(registrations::unregister),
        )
        .route(
            "/events/:event_id/users/:user_id",
            delete(registrations::remove_user),
        )
}
