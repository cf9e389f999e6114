//! Authentication extractors
//!
//! `AuthUser` resolves the bearer token to a live user and session;
//! `RequireAdmin` additionally demands the admin flag.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use events_core::{DomainError, SessionId, User};
use events_service::{AuthService, AuthenticatedUser};

use crate::response::ApiError;
use crate::state::AppState;

/// The caller behind a valid, unrevoked bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub session_id: SessionId,
}

impl From<AuthenticatedUser> for AuthUser {
    fn from(auth: AuthenticatedUser) -> Self {
        Self {
            user: auth.user,
            session_id: auth.session_id,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let authenticated = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Bearer token rejected");
                ApiError::from(e)
            })?;

        Ok(authenticated.into())
    }
}

/// Requires an administrator. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(auth): RequireAdmin) -> ApiResult<NoContent> {
///     // auth.user.is_admin is guaranteed here
///     Ok(NoContent)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.user.is_admin {
            tracing::warn!(user_id = %auth.user.id, "Admin route refused");
            return Err(DomainError::AdminRequired.into());
        }
        Ok(RequireAdmin(auth))
    }
}
