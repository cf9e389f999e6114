//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use events_common::IssuedToken;
use events_core::entities::{Event, Registration, User};

use super::responses::{AuthResponse, EventResponse, RegistrationResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl EventResponse {
    /// Map an event, classifying it as upcoming or past relative to `now`
    pub fn at(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            max_attendees: event.max_attendees,
            status: event.timing(now),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self::at(event, Utc::now())
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            user_id: registration.user_id,
            event_id: registration.event_id,
            status: registration.status,
            registered_at: registration.registered_at,
        }
    }
}

impl AuthResponse {
    pub fn new(token: IssuedToken, user: &User) -> Self {
        Self {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(user),
        }
    }
}
