//! User handlers
//!
//! `/me` for the caller's own profile, `/users` for administrators.

use axum::{extract::State, Json};
use events_service::{
    CreateUserRequest, UpdateProfileRequest, UpdateUserRequest, UserResponse, UserService,
};

use crate::extractors::{AuthUser, RequireAdmin, UserPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /me
pub async fn get_current_user(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}

/// PUT /me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(&auth.user, request).await?;
    Ok(Json(response))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users(&admin.user).await?))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    UserPath(user_id): UserPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_user(&admin.user, user_id).await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(&admin.user, request).await?;
    Ok(Created(Json(response)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    UserPath(user_id): UserPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(&admin.user, user_id, request).await?;
    Ok(Json(response))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    UserPath(user_id): UserPath,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_user(&admin.user, user_id).await?;
    Ok(NoContent)
}
