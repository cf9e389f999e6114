//! Registration service
//!
//! Users sign themselves up for events; admins can remove anyone.

use events_core::entities::{NewRegistration, User};
use events_core::{DomainError, EventId, UserId};
use tracing::{info, instrument};

use crate::dto::RegistrationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_admin;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register `user` for an event with status `pending`
    ///
    /// A second registration for the same pair fails with a conflict.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn register(
        &self,
        user: &User,
        event_id: EventId,
    ) -> ServiceResult<RegistrationResponse> {
        self.ensure_event(event_id).await?;

        let registration = self
            .ctx
            .registration_repo()
            .create(&NewRegistration::pending(user.id, event_id))
            .await?;

        info!(event_id = %event_id, "Registered for event");
        Ok(RegistrationResponse::from(registration))
    }

    /// Remove the caller's own registration
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn unregister(&self, user: &User, event_id: EventId) -> ServiceResult<()> {
        self.ensure_event(event_id).await?;
        self.ctx.registration_repo().delete(user.id, event_id).await?;
        info!(event_id = %event_id, "Unregistered from event");
        Ok(())
    }

    /// Remove another user's registration (admin)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn remove_user_registration(
        &self,
        actor: &User,
        event_id: EventId,
        user_id: UserId,
    ) -> ServiceResult<()> {
        require_admin(actor)?;
        self.ensure_event(event_id).await?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        self.ctx.registration_repo().delete(user_id, event_id).await?;
        info!(event_id = %event_id, user_id = %user_id, "Registration removed by admin");
        Ok(())
    }

    async fn ensure_event(&self, event_id: EventId) -> ServiceResult<()> {
        match self.ctx.event_repo().find_by_id(event_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::EventNotFound(event_id).into()),
        }
    }
}
