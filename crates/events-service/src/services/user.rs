//! User service
//!
//! Self-service profile operations and admin user management.

use events_core::entities::{NewUser, User, UserChanges};
use events_core::{DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_admin;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user by ID (admin)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_user(&self, actor: &User, user_id: UserId) -> ServiceResult<UserResponse> {
        require_admin(actor)?;
        let user = self.load(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// List all users, id ascending (admin)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_users(&self, actor: &User) -> ServiceResult<Vec<UserResponse>> {
        require_admin(actor)?;
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Create a user, optionally an administrator (admin)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, email = %request.email))]
    pub async fn create_user(
        &self,
        actor: &User,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_admin(actor)?;

        let password_hash = self.ctx.password_service().hash_checked(&request.password)?;
        let mut new_user = NewUser::new(request.name, request.email, password_hash);
        if request.is_admin {
            new_user = new_user.admin();
        }

        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = %user.id, is_admin = user.is_admin, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Partially update any user, including the admin flag (admin)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_user(
        &self,
        actor: &User,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_admin(actor)?;
        let user = self.load(user_id).await?;
        self.apply_update(user, request.changes(), request.password.as_deref())
            .await
    }

    /// Update the caller's own name, email or password
    #[instrument(skip(self, user, request), fields(user_id = %user.id))]
    pub async fn update_profile(
        &self,
        user: &User,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let current = self.load(user.id).await?;
        self.apply_update(current, request.changes(), request.password.as_deref())
            .await
    }

    /// Delete a user (admin)
    ///
    /// Registrations go with the user; open sessions are revoked.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_user(&self, actor: &User, user_id: UserId) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx.user_repo().delete(user_id).await?;
        let revoked = self.ctx.session_store().revoke_all_for_user(user_id).await?;

        info!(user_id = %user_id, revoked_sessions = revoked, "User deleted");
        Ok(())
    }

    async fn load(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn apply_update(
        &self,
        mut user: User,
        changes: UserChanges,
        password: Option<&str>,
    ) -> ServiceResult<UserResponse> {
        // Hash first so a weak password leaves the row untouched
        let password_hash = password
            .map(|p| self.ctx.password_service().hash_checked(p))
            .transpose()?;

        if user.apply(changes) {
            self.ctx.user_repo().update(&user).await?;
        }

        if let Some(hash) = password_hash {
            self.ctx.user_repo().update_password(user.id, &hash).await?;
        }

        info!(user_id = %user.id, "User updated");
        Ok(UserResponse::from(&user))
    }
}
