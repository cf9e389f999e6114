//! User model → entity mapper

use events_core::entities::User;
use events_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
