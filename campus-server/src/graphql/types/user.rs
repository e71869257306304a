use async_graphql::*;
use campus_core::database::entities::users;
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        let groups = model.group_names();
        Self {
            id: ID::from(model.id.to_string()),
            user_name: model.user_name,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password_hash: model.password_hash,
            groups,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
