//! Registration database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for registrations table. `status` is one of
/// `pending`, `accepted`, `rejected` (enforced by a CHECK constraint).
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationModel {
    pub user_id: i64,
    pub event_id: i64,
    pub status: String,
    pub registered_at: DateTime<Utc>,
}
