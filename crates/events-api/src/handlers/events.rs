//! Event handlers

use axum::{extract::State, Json};
use events_service::{
    CreateEventRequest, EventQuery, EventResponse, EventService, UpdateEventRequest,
};

use crate::extractors::{AuthUser, EventPath, QueryParams, RequireAdmin, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.list_events().await?))
}

/// GET /events/upcoming
pub async fn upcoming_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.upcoming_events().await?))
}

/// GET /events/past
pub async fn past_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.past_events().await?))
}

/// GET /events/filter?title=&location=&from=&to=&status=
pub async fn filter_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<EventQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.filter_events(query).await?))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(&admin.user, request).await?;
    Ok(Created(Json(response)))
}

/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EventPath(event_id): EventPath,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.update_event(&admin.user, event_id, request).await?;
    Ok(Json(response))
}

/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EventPath(event_id): EventPath,
) -> ApiResult<NoContent> {
    let service = EventService::new(state.service_context());
    service.delete_event(&admin.user, event_id).await?;
    Ok(NoContent)
}
