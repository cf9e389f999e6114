//! PostgreSQL implementation of RegistrationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use events_core::entities::{NewRegistration, Registration};
use events_core::error::DomainError;
use events_core::traits::{RegistrationRepository, RepoResult};
use events_core::value_objects::{EventId, UserId};

use crate::models::RegistrationModel;

use super::error::{map_db_error, map_insert_violation};

const USER_FOREIGN_KEY: &str = "registrations_user_id_fkey";

/// The missing row behind a foreign-key violation on insert
fn missing_reference(constraint: Option<&str>, user_id: UserId, event_id: EventId) -> DomainError {
    if constraint == Some(USER_FOREIGN_KEY) {
        DomainError::UserNotFound(user_id)
    } else {
        DomainError::EventNotFound(event_id)
    }
}

/// PostgreSQL implementation of RegistrationRepository
#[derive(Clone)]
pub struct PgRegistrationRepository {
    pool: PgPool,
}

impl PgRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    #[instrument(skip(self, registration), fields(
        user_id = %registration.user_id,
        event_id = %registration.event_id,
    ))]
    async fn create(&self, registration: &NewRegistration) -> RepoResult<Registration> {
        let (user_id, event_id) = (registration.user_id, registration.event_id);

        let row = sqlx::query_as::<_, RegistrationModel>(
            r"
            INSERT INTO registrations (user_id, event_id, status, registered_at)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, event_id, status, registered_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(event_id.into_inner())
        .bind(registration.status.as_str())
        .bind(registration.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_insert_violation(
                e,
                || DomainError::RegistrationAlreadyExists { user_id, event_id },
                |constraint| missing_reference(constraint, user_id, event_id),
            )
        })?;

        Registration::try_from(row)
    }

    #[instrument(skip(self, registration), fields(
        user_id = %registration.user_id,
        event_id = %registration.event_id,
    ))]
    async fn create_if_absent(&self, registration: &NewRegistration) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO registrations (user_id, event_id, status, registered_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, event_id) DO NOTHING
            ",
        )
        .bind(registration.user_id.into_inner())
        .bind(registration.event_id.into_inner())
        .bind(registration.status.as_str())
        .bind(registration.registered_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            debug!("Registration already present, skipped");
        }
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId, event_id: EventId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM registrations WHERE user_id = $1 AND event_id = $2")
            .bind(user_id.into_inner())
            .bind(event_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RegistrationNotFound { user_id, event_id });
        }

        Ok(())
    }
}
