//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Event, EventTiming, NewEvent, NewRegistration, NewUser, Registration, User,
};
use crate::error::DomainError;
use crate::value_objects::{EventId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users ordered by id
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Insert a user. Fails with `EmailAlreadyExists` on a duplicate email.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Persist profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user together with their registrations
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Criteria for listing events. Every field that is set must match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Inclusive lower bound on the event date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the event date
    pub date_to: Option<DateTime<Utc>>,
    /// Upcoming/past relative to `reference_time`
    pub timing: Option<EventTiming>,
    pub reference_time: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn upcoming(now: DateTime<Utc>) -> Self {
        Self {
            timing: Some(EventTiming::Upcoming),
            reference_time: Some(now),
            ..Default::default()
        }
    }

    pub fn past(now: DateTime<Utc>) -> Self {
        Self {
            timing: Some(EventTiming::Past),
            reference_time: Some(now),
            ..Default::default()
        }
    }

    /// The time timing is judged against, defaulting to the current time
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    /// Evaluate the filter in memory. Stores that push the filter down into a
    /// query must agree with this.
    pub fn matches(&self, event: &Event) -> bool {
        fn contains(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        if let Some(title) = &self.title {
            if !contains(&event.title, title) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains(&event.location, location) {
                return false;
            }
        }
        if self.date_from.is_some_and(|from| event.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| event.date > to) {
            return false;
        }
        if let Some(timing) = self.timing {
            if event.timing(self.now()) != timing {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// List events matching `filter`, ordered by date ascending
    async fn list(&self, filter: &EventFilter) -> RepoResult<Vec<Event>>;

    /// Insert an event
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Persist an updated event
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Delete an event together with its registrations
    async fn delete(&self, id: EventId) -> RepoResult<()>;
}

// ============================================================================
// Registration Repository
// ============================================================================

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a registration. Fails with `RegistrationAlreadyExists` if the
    /// pair is already registered.
    async fn create(&self, registration: &NewRegistration) -> RepoResult<Registration>;

    /// Insert a registration unless the pair already exists.
    /// Returns `true` if a row was written.
    async fn create_if_absent(&self, registration: &NewRegistration) -> RepoResult<bool>;

    /// Delete a registration. Fails with `RegistrationNotFound` if absent.
    async fn delete(&self, user_id: UserId, event_id: EventId) -> RepoResult<()>;
}
