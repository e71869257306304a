use async_graphql::*;
use campus_core::database::entities::projects;
use campus_core::ProjectStatus;
use chrono::{DateTime, Utc};

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Client;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub description: String,
    /// Human-readable label, e.g. "Not Started"
    pub status: String,
    #[graphql(skip)]
    pub client_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            description: model.description,
            status: model.status,
            client_id: model.client_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Project {
    /// Looked up on every read; null once the client has been deleted.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let client = context
            .clients()
            .get(self.client_id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(client.map(Client::from))
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
#[graphql(name = "ProjectStatus")]
pub enum ProjectStatusInput {
    #[default]
    #[graphql(name = "new")]
    New,
    #[graphql(name = "progress")]
    Progress,
    #[graphql(name = "completed")]
    Completed,
}

impl From<ProjectStatusInput> for ProjectStatus {
    fn from(input: ProjectStatusInput) -> Self {
        match input {
            ProjectStatusInput::New => ProjectStatus::NotStarted,
            ProjectStatusInput::Progress => ProjectStatus::InProgress,
            ProjectStatusInput::Completed => ProjectStatus::Completed,
        }
    }
}

/// Status argument of `updateProject`; same values as `ProjectStatus`, no default.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(name = "ProjectStatusUpdate")]
pub enum ProjectStatusUpdate {
    #[graphql(name = "new")]
    New,
    #[graphql(name = "progress")]
    Progress,
    #[graphql(name = "completed")]
    Completed,
}

impl From<ProjectStatusUpdate> for ProjectStatus {
    fn from(update: ProjectStatusUpdate) -> Self {
        match update {
            ProjectStatusUpdate::New => ProjectStatus::NotStarted,
            ProjectStatusUpdate::Progress => ProjectStatus::InProgress,
            ProjectStatusUpdate::Completed => ProjectStatus::Completed,
        }
    }
}
