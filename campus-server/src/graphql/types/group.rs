use async_graphql::*;
use campus_core::database::entities::groups;
use chrono::{DateTime, Utc};

/// A class study group pinned to a meeting place.
#[derive(SimpleObject, Clone, Debug)]
pub struct Group {
    pub id: ID,
    pub group_name: String,
    pub class_name: String,
    pub class_number: String,
    /// Member emails in join order, duplicates included
    pub email: Vec<String>,
    pub time: String,
    pub longitude: f64,
    pub latitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<groups::Model> for Group {
    fn from(model: groups::Model) -> Self {
        let email = model.emails();
        Self {
            id: ID::from(model.id.to_string()),
            group_name: model.group_name,
            class_name: model.class_name,
            class_number: model.class_number,
            email,
            time: model.time,
            longitude: model.longitude,
            latitude: model.latitude,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
