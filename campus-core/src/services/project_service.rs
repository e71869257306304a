use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::{debug, info};

use crate::common::db_errors::DbResultExt;
use crate::database::entities::projects;
use crate::errors::CoreResult;
use crate::project_status::ProjectStatus;
use crate::services::ValidationService;

#[derive(Clone, Debug)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: i32,
}

/// Partial overwrite: only `Some` fields are written.
#[derive(Clone, Debug, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[derive(Clone)]
pub struct ProjectService {
    db: DatabaseConnection,
}

impl ProjectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> CoreResult<Vec<projects::Model>> {
        projects::Entity::find()
            .order_by_asc(projects::Column::Id)
            .all(&self.db)
            .await
            .db_context("list projects")
    }

    pub async fn get(&self, id: i32) -> CoreResult<Option<projects::Model>> {
        projects::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .db_context("load project")
    }

    /// The client is not checked for existence; a dangling `client_id` is allowed.
    pub async fn create(&self, input: NewProject) -> CoreResult<projects::Model> {
        ValidationService::require_all(&[
            ("name", input.name.as_str()),
            ("description", input.description.as_str()),
        ])?;

        let now = Utc::now();
        let project = projects::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            status: Set(input.status.label().to_string()),
            client_id: Set(input.client_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let project = project.insert(&self.db).await.db_context("create project")?;
        info!(
            "Created project {} ({}) for client {}",
            project.id, project.name, project.client_id
        );
        Ok(project)
    }

    /// Returns `None` when the project does not exist. Overwritten values are
    /// not validated.
    pub async fn update(
        &self,
        id: i32,
        update: ProjectUpdate,
    ) -> CoreResult<Option<projects::Model>> {
        let Some(project) = self.get(id).await? else {
            debug!("Update skipped, project {} does not exist", id);
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(project));
        }

        let mut active: projects::ActiveModel = project.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(status) = update.status {
            active.status = Set(status.label().to_string());
        }
        active.updated_at = Set(Utc::now());

        let project = active.update(&self.db).await.db_context("update project")?;
        debug!("Updated project {}", id);
        Ok(Some(project))
    }

    pub async fn delete(&self, id: i32) -> CoreResult<Option<projects::Model>> {
        let Some(project) = self.get(id).await? else {
            debug!("Delete skipped, project {} does not exist", id);
            return Ok(None);
        };

        project
            .clone()
            .delete(&self.db)
            .await
            .db_context("delete project")?;
        info!("Deleted project {}", id);
        Ok(Some(project))
    }
}
