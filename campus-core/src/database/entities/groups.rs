use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::string_list;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_name: String,
    pub class_name: String,
    pub class_number: String,
    #[sea_orm(column_type = "Text", default_value = "[]")]
    pub email: String, // JSON array of member emails
    pub time: String,
    pub longitude: f64,
    pub latitude: f64,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn emails(&self) -> Vec<String> {
        string_list::decode(&self.email)
    }
}
