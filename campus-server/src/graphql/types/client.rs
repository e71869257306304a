use async_graphql::*;
use campus_core::database::entities::clients;
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone, Debug)]
pub struct Client {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<clients::Model> for Client {
    fn from(model: clients::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
