//! Authentication service
//!
//! Handles sign-up, login, logout and bearer token resolution.

use chrono::Utc;
use events_common::AppError;
use events_core::entities::{NewUser, Session, User};
use events_core::SessionId;
use tracing::{debug, info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A caller resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session_id: SessionId,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new (non-admin) user and sign them in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let password_hash = self.ctx.password_service().hash_checked(&request.password)?;

        // The unique index on email turns a duplicate into EmailAlreadyExists
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(request.name, request.email, password_hash))
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.open_session(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(self.ctx.password_service().reject_unknown(&request.password))
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(self.ctx.password_service().reject_unknown(&request.password))
            })?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.open_session(&user).await
    }

    /// Revoke a session; its token stops working immediately
    #[instrument(skip(self))]
    pub async fn logout(&self, session_id: SessionId) -> ServiceResult<()> {
        self.ctx.session_store().revoke(session_id).await?;
        info!("Session revoked");
        Ok(())
    }

    /// Resolve a bearer token to the live user behind it
    ///
    /// Fails with an authentication error when the token is malformed or
    /// expired, when its session was revoked, or when the user was deleted.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<AuthenticatedUser> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;
        let session_id = claims.session_id()?;

        let session = self
            .ctx
            .session_store()
            .find(session_id)
            .await?
            .ok_or_else(|| {
                debug!(session_id = %session_id, "Session not found");
                ServiceError::App(AppError::SessionRevoked)
            })?;

        if session.user_id != user_id {
            warn!(session_id = %session_id, "Session does not belong to token subject");
            return Err(AppError::InvalidToken.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Token subject no longer exists");
                ServiceError::App(AppError::InvalidToken)
            })?;

        Ok(AuthenticatedUser { user, session_id })
    }

    async fn open_session(&self, user: &User) -> ServiceResult<AuthResponse> {
        let jwt = self.ctx.jwt_service();
        let session = Session::open(user.id, jwt.token_ttl());
        self.ctx.session_store().create(&session).await?;

        let token = jwt.issue(&session)?;
        debug!(
            session_id = %session.id,
            remaining = session.remaining_secs(Utc::now()),
            "Session opened"
        );

        Ok(AuthResponse::new(token, user))
    }
}
