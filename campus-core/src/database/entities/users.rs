use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::string_list;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String, // stored exactly as the caller sent it
    #[sea_orm(column_type = "Text", default_value = "[]")]
    pub groups: String, // JSON array of group names
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn group_names(&self) -> Vec<String> {
        string_list::decode(&self.groups)
    }
}
