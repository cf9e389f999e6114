//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
