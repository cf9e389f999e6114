//! Request DTOs for API endpoints
//!
//! All body DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use events_core::{EventChanges, EventFilter, EventTiming, NewEvent, UserChanges};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Self-service sign-up
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update of the caller's own profile
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

impl UpdateProfileRequest {
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: None,
        }
    }
}

/// Admin creation of a user account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// Admin update of any user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub is_admin: Option<bool>,
}

impl UpdateUserRequest {
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

// ============================================================================
// Event Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 10_000, message = "Description must be at most 10000 characters"))]
    pub description: String,

    /// Past dates are accepted
    pub date: DateTime<Utc>,

    #[validate(
        length(min = 1, max = 255, message = "Location must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub location: String,

    #[validate(range(min = 0, message = "max_attendees must not be negative"))]
    pub max_attendees: i32,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            date: request.date,
            location: request.location,
            max_attendees: request.max_attendees,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(length(max = 10_000, message = "Description must be at most 10000 characters"))]
    pub description: Option<String>,

    pub date: Option<DateTime<Utc>>,

    #[validate(
        length(min = 1, max = 255, message = "Location must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "max_attendees must not be negative"))]
    pub max_attendees: Option<i32>,
}

impl From<UpdateEventRequest> for EventChanges {
    fn from(request: UpdateEventRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            date: request.date,
            location: request.location,
            max_attendees: request.max_attendees,
        }
    }
}

/// Query string of `GET /events/filter`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    /// Inclusive lower date bound (RFC 3339)
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper date bound (RFC 3339)
    pub to: Option<DateTime<Utc>>,
    /// `upcoming` or `past`
    pub status: Option<EventTiming>,
}

impl EventQuery {
    /// Turn the query into a store filter evaluated at `now`.
    /// Blank text criteria are ignored.
    pub fn into_filter(self, now: DateTime<Utc>) -> Result<EventFilter, String> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err("'from' must not be after 'to'".to_string());
            }
        }

        let non_blank = |s: Option<String>| {
            s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        Ok(EventFilter {
            title: non_blank(self.title),
            location: non_blank(self.location),
            date_from: self.from,
            date_to: self.to,
            timing: self.status,
            reference_time: Some(now),
        })
    }
}
