//! In-memory implementations of the repository and session store traits
//!
//! They mirror the PostgreSQL constraints the services rely on: unique
//! email (case-insensitive), unique (user, event) pair, foreign keys and
//! cascading deletes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use events_core::entities::{
    Event, NewEvent, NewRegistration, NewUser, Registration, Session, User,
};
use events_core::traits::{
    EventFilter, EventRepository, RegistrationRepository, RepoResult, SessionStore,
    UserRepository,
};
use events_core::{DomainError, EventId, SessionId, UserId};
use parking_lot::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<(User, String)>,
    events: Vec<Event>,
    registrations: Vec<Registration>,
    next_user_id: i64,
    next_event_id: i64,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|(u, _)| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }
}

/// Users, events and registrations behind one lock
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().users.len()
    }

    pub fn event_count(&self) -> usize {
        self.tables.lock().events.len()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.tables.lock().registrations.clone()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .iter()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, _)| u.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let tables = self.tables.lock();
        let mut users: Vec<_> = tables.users.iter().map(|(u, _)| u.clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut tables = self.tables.lock();
        if tables.email_taken(&user.email, None) {
            return Err(DomainError::EmailAlreadyExists);
        }

        tables.next_user_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(tables.next_user_id),
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: now,
            updated_at: now,
        };
        tables.users.push((created.clone(), user.password_hash.clone()));
        Ok(created)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.email_taken(&user.email, Some(user.id)) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let (stored, _) = tables
            .users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.users.len();
        tables.users.retain(|(u, _)| u.id != id);
        if tables.users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        tables.registrations.retain(|r| r.user_id != id);
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let (_, hash) = tables
            .users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let tables = self.tables.lock();
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self, filter: &EventFilter) -> RepoResult<Vec<Event>> {
        let tables = self.tables.lock();
        let mut events: Vec<_> = tables
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.date, e.id));
        Ok(events)
    }

    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut tables = self.tables.lock();
        tables.next_event_id += 1;
        let now = Utc::now();
        let created = Event {
            id: EventId::new(tables.next_event_id),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            max_attendees: event.max_attendees,
            created_at: now,
            updated_at: now,
        };
        tables.events.push(created.clone());
        Ok(created)
    }

    async fn update(&self, event: &Event) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let stored = tables
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or(DomainError::EventNotFound(event.id))?;
        *stored = event.clone();
        Ok(())
    }

    async fn delete(&self, id: EventId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.events.len();
        tables.events.retain(|e| e.id != id);
        if tables.events.len() == before {
            return Err(DomainError::EventNotFound(id));
        }
        tables.registrations.retain(|r| r.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl RegistrationRepository for MemoryStore {
    async fn create(&self, registration: &NewRegistration) -> RepoResult<Registration> {
        let (user_id, event_id) = (registration.user_id, registration.event_id);
        let mut tables = self.tables.lock();

        if !tables.users.iter().any(|(u, _)| u.id == user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }
        if !tables.events.iter().any(|e| e.id == event_id) {
            return Err(DomainError::EventNotFound(event_id));
        }
        if tables
            .registrations
            .iter()
            .any(|r| r.user_id == user_id && r.event_id == event_id)
        {
            return Err(DomainError::RegistrationAlreadyExists { user_id, event_id });
        }

        let created = Registration::from(registration.clone());
        tables.registrations.push(created.clone());
        Ok(created)
    }

    async fn create_if_absent(&self, registration: &NewRegistration) -> RepoResult<bool> {
        match RegistrationRepository::create(self, registration).await {
            Ok(_) => Ok(true),
            Err(DomainError::RegistrationAlreadyExists { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, user_id: UserId, event_id: EventId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let before = tables.registrations.len();
        tables
            .registrations
            .retain(|r| !(r.user_id == user_id && r.event_id == event_id));
        if tables.registrations.len() == before {
            return Err(DomainError::RegistrationNotFound { user_id, event_id });
        }
        Ok(())
    }
}

/// Sessions kept in a map; expired entries read as absent
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: &Session) -> RepoResult<()> {
        self.sessions.lock().insert(session.id, session.clone());
        Ok(())
    }

    async fn find(&self, id: SessionId) -> RepoResult<Option<Session>> {
        let now = Utc::now();
        Ok(self
            .sessions
            .lock()
            .get(&id)
            .filter(|s| !s.is_expired(now))
            .cloned())
    }

    async fn revoke(&self, id: SessionId) -> RepoResult<()> {
        self.sessions.lock().remove(&id);
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<usize> {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != user_id);
        Ok(before - sessions.len())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
