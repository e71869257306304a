use async_graphql::*;
use campus_core::services::{NewProject, ProjectUpdate};

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::helpers::parse_id;
use crate::graphql::types::{Project, ProjectStatusInput, ProjectStatusUpdate};

#[derive(Default)]
pub struct ProjectMutation;

#[Object]
impl ProjectMutation {
    /// Create a new project
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(default)] status: ProjectStatusInput,
        client_id: ID,
    ) -> Result<Project> {
        let context = ctx.data::<GraphQLContext>()?;
        let client_id = parse_id("clientId", &client_id)?;
        let project = context
            .projects()
            .create(NewProject {
                name,
                description,
                status: status.into(),
                client_id,
            })
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Project::from(project))
    }

    /// Delete a project
    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id("id", &id)?;
        let project = context
            .projects()
            .delete(id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(project.map(Project::from))
    }

    /// Overwrite the supplied fields of a project; omitted fields are kept
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatusUpdate>,
    ) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id("id", &id)?;
        let update = ProjectUpdate {
            name,
            description,
            status: status.map(Into::into),
        };
        let project = context
            .projects()
            .update(id, update)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(project.map(Project::from))
    }
}
