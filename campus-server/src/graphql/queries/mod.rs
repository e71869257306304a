use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::helpers::parse_id;
use crate::graphql::types::{Client, Group, Project, User};

pub struct Query;

#[Object]
impl Query {
    /// Get all groups
    async fn groups(&self, ctx: &Context<'_>) -> Result<Vec<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let groups = context
            .groups()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(groups.into_iter().map(Group::from).collect())
    }

    /// Groups of the AMS 101 class. The arguments are accepted but not used.
    #[graphql(name = "group_by_class")]
    async fn group_by_class(
        &self,
        ctx: &Context<'_>,
        class_name: Option<String>,
        class_number: Option<String>,
    ) -> Result<Vec<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let groups = context
            .groups()
            .list_by_class(class_name.as_deref(), class_number.as_deref())
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(groups.into_iter().map(Group::from).collect())
    }

    /// Users with this user name. Performs no password check.
    async fn login(&self, ctx: &Context<'_>, user_name: Option<String>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let Some(user_name) = user_name else {
            return Ok(Vec::new());
        };
        let users = context
            .users()
            .find_by_user_name(&user_name)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get all clients
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let clients = context
            .clients()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(clients.into_iter().map(Client::from).collect())
    }

    /// Get a specific client by ID
    async fn client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id("id", &id)?;
        let client = context
            .clients()
            .get(id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(client.map(Client::from))
    }

    /// Get all projects
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let projects = context
            .projects()
            .list()
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(projects.into_iter().map(Project::from).collect())
    }

    /// Get a specific project by ID
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id("id", &id)?;
        let project = context
            .projects()
            .get(id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(project.map(Project::from))
    }
}
