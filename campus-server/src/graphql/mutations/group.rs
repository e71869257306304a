use async_graphql::*;
use campus_core::services::NewGroup;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::Group;

#[derive(Default)]
pub struct GroupMutation;

#[Object]
impl GroupMutation {
    /// Create a study group with `email` as its first member
    async fn add_group(
        &self,
        ctx: &Context<'_>,
        group_name: String,
        class_name: String,
        class_number: String,
        email: String,
        time: String,
        longitude: f64,
        latitude: f64,
    ) -> Result<Group> {
        let context = ctx.data::<GraphQLContext>()?;
        let group = context
            .groups()
            .create(NewGroup {
                group_name,
                class_name,
                class_number,
                email,
                time,
                longitude,
                latitude,
            })
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Group::from(group))
    }

    /// Append a member email to an existing group
    #[graphql(name = "addtoGroup")]
    async fn addto_group(
        &self,
        ctx: &Context<'_>,
        group_name: String,
        email: String,
    ) -> Result<Group> {
        let context = ctx.data::<GraphQLContext>()?;
        let group = context
            .groups()
            .add_member(&group_name, &email)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Group::from(group))
    }

    /// Delete a group by name; null when there was no such group
    async fn delete_group(&self, ctx: &Context<'_>, group_name: String) -> Result<Option<Group>> {
        let context = ctx.data::<GraphQLContext>()?;
        let group = context
            .groups()
            .delete_by_name(&group_name)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(group.map(Group::from))
    }
}
