//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table (password hash excluded)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
