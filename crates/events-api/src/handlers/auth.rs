//! Authentication handlers
//!
//! Sign-up, login, logout and the caller's identity.

use axum::{extract::State, Json};
use events_service::{AuthResponse, AuthService, LoginRequest, RegisterRequest, UserResponse};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Revoke the session behind the presented token
///
/// POST /logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.session_id).await?;
    Ok(NoContent)
}

/// GET /user
pub async fn whoami(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}
