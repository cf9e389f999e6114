//! Registration handlers

use axum::{extract::State, Json};
use events_service::{RegistrationResponse, RegistrationService};

use crate::extractors::{AuthUser, EventPath, EventUserPath, RequireAdmin};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /events/{event_id}/register
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    EventPath(event_id): EventPath,
) -> ApiResult<Created<Json<RegistrationResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register(&auth.user, event_id).await?;
    Ok(Created(Json(response)))
}

/// DELETE /events/{event_id}/unregister
pub async fn unregister(
    State(state): State<AppState>,
    auth: AuthUser,
    EventPath(event_id): EventPath,
) -> ApiResult<NoContent> {
    let service = RegistrationService::new(state.service_context());
    service.unregister(&auth.user, event_id).await?;
    Ok(NoContent)
}

/// DELETE /events/{event_id}/users/{user_id}
pub async fn remove_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    path: EventUserPath,
) -> ApiResult<NoContent> {
    let service = RegistrationService::new(state.service_context());
    service
        .remove_user_registration(&admin.user, path.event_id, path.user_id)
        .await?;
    Ok(NoContent)
}
