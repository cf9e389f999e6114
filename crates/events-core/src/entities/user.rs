//! User entity - an account that can sign in and register for events

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// A user account.
///
/// The password hash lives only in the store; it is fetched separately when
/// credentials are checked and never travels with the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to insert a user; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: String) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash,
            is_admin: false,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// Partial update of a user's profile fields
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl User {
    /// Apply a partial update. Returns `true` if any field actually changed.
    pub fn apply(&mut self, changes: UserChanges) -> bool {
        let mut changed = false;

        if let Some(name) = changes.name {
            if name != self.name {
                self.name = name;
                changed = true;
            }
        }
        if let Some(email) = changes.email {
            if email != self.email {
                self.email = email;
                changed = true;
            }
        }
        if let Some(is_admin) = changes.is_admin {
            if is_admin != self.is_admin {
                self.is_admin = is_admin;
                changed = true;
            }
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}
