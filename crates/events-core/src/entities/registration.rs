//! Registration entity - a user's sign-up for an event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{EventId, UserId};

/// Review state of a registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RegistrationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::ValidationError(format!(
                "unknown registration status '{other}'"
            ))),
        }
    }
}

/// A user's registration for an event. At most one exists per (user, event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user_id: UserId,
    pub event_id: EventId,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}

/// Data needed to insert a registration
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub user_id: UserId,
    pub event_id: EventId,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}

impl NewRegistration {
    /// A fresh self-registration: pending, stamped now
    pub fn pending(user_id: UserId, event_id: EventId) -> Self {
        Self {
            user_id,
            event_id,
            status: RegistrationStatus::Pending,
            registered_at: Utc::now(),
        }
    }
}

impl From<NewRegistration> for Registration {
    fn from(new: NewRegistration) -> Self {
        Self {
            user_id: new.user_id,
            event_id: new.event_id,
            status: new.status,
            registered_at: new.registered_at,
        }
    }
}
