//! Registration model → entity mapper

use events_core::entities::{Registration, RegistrationStatus};
use events_core::error::DomainError;
use events_core::value_objects::{EventId, UserId};

use crate::models::RegistrationModel;

impl TryFrom<RegistrationModel> for Registration {
    type Error = DomainError;

    fn try_from(model: RegistrationModel) -> Result<Self, Self::Error> {
        let status = model.status.parse::<RegistrationStatus>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "registration ({}, {}) has unknown status '{}'",
                model.user_id, model.event_id, model.status
            ))
        })?;

        Ok(Registration {
            user_id: UserId::new(model.user_id),
            event_id: EventId::new(model.event_id),
            status,
            registered_at: model.registered_at,
        })
    }
}
