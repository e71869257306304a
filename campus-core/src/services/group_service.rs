use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, info};

use crate::common::db_errors::DbResultExt;
use crate::common::string_list;
use crate::database::entities::groups;
use crate::errors::{CoreError, CoreResult};
use crate::services::ValidationService;

/// The class `list_by_class` always answers for, whatever it is asked.
pub const FIXED_CLASS_NAME: &str = "AMS";
pub const FIXED_CLASS_NUMBER: &str = "101";

#[derive(Clone, Debug)]
pub struct NewGroup {
    pub group_name: String,
    pub class_name: String,
    pub class_number: String,
    /// Founding member; the stored list starts with exactly this entry.
    pub email: String,
    pub time: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Clone)]
pub struct GroupService {
    db: DatabaseConnection,
}

impl GroupService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> CoreResult<Vec<groups::Model>> {
        groups::Entity::find()
            .order_by_asc(groups::Column::Id)
            .all(&self.db)
            .await
            .db_context("list groups")
    }

    /// Ignores both arguments and filters on [`FIXED_CLASS_NAME`] /
    /// [`FIXED_CLASS_NUMBER`].
    pub async fn list_by_class(
        &self,
        class_name: Option<&str>,
        class_number: Option<&str>,
    ) -> CoreResult<Vec<groups::Model>> {
        debug!(
            ?class_name,
            ?class_number,
            "group_by_class requested, answering for {} {}",
            FIXED_CLASS_NAME,
            FIXED_CLASS_NUMBER
        );

        groups::Entity::find()
            .filter(groups::Column::ClassName.eq(FIXED_CLASS_NAME))
            .filter(groups::Column::ClassNumber.eq(FIXED_CLASS_NUMBER))
            .order_by_asc(groups::Column::Id)
            .all(&self.db)
            .await
            .db_context("list groups by class")
    }

    /// Oldest group with this name, if any.
    pub async fn find_by_name(&self, group_name: &str) -> CoreResult<Option<groups::Model>> {
        groups::Entity::find()
            .filter(groups::Column::GroupName.eq(group_name))
            .order_by_asc(groups::Column::Id)
            .one(&self.db)
            .await
            .db_context("find group by name")
    }

    pub async fn create(&self, input: NewGroup) -> CoreResult<groups::Model> {
        ValidationService::require_all(&[
            ("groupName", input.group_name.as_str()),
            ("className", input.class_name.as_str()),
            ("classNumber", input.class_number.as_str()),
            ("email", input.email.as_str()),
            ("time", input.time.as_str()),
        ])?;
        ValidationService::require_coordinate("longitude", input.longitude)?;
        ValidationService::require_coordinate("latitude", input.latitude)?;

        let now = Utc::now();
        let group = groups::ActiveModel {
            group_name: Set(input.group_name),
            class_name: Set(input.class_name),
            class_number: Set(input.class_number),
            email: Set(string_list::encode(&[input.email])?),
            time: Set(input.time),
            longitude: Set(input.longitude),
            latitude: Set(input.latitude),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let group = group.insert(&self.db).await.db_context("create group")?;
        info!(
            "Created group {} ({} {}) at ({}, {})",
            group.group_name, group.class_name, group.class_number, group.latitude, group.longitude
        );
        Ok(group)
    }

    /// Appends `email` to the named group's member list. Duplicates are kept.
    ///
    /// Fails with `NotFound` when no group has this name; a group is never
    /// created here. Lookup and save are two separate store calls.
    pub async fn add_member(&self, group_name: &str, email: &str) -> CoreResult<groups::Model> {
        let group = self
            .find_by_name(group_name)
            .await?
            .ok_or_else(|| CoreError::not_found("Group", group_name))?;

        let mut emails = group.emails();
        emails.push(email.to_string());

        let mut active: groups::ActiveModel = group.into();
        active.email = Set(string_list::encode(&emails)?);
        active.updated_at = Set(Utc::now());

        let group = active.update(&self.db).await.db_context("add group member")?;
        debug!("Group {} now has {} members", group.group_name, emails.len());
        Ok(group)
    }

    /// Deletes the oldest group with this name and returns it; `None` when
    /// there is nothing to delete.
    pub async fn delete_by_name(&self, group_name: &str) -> CoreResult<Option<groups::Model>> {
        let Some(group) = self.find_by_name(group_name).await? else {
            debug!("Delete skipped, no group named {}", group_name);
            return Ok(None);
        };

        group
            .clone()
            .delete(&self.db)
            .await
            .db_context("delete group")?;
        info!("Deleted group {} ({})", group.group_name, group.id);
        Ok(Some(group))
    }
}
