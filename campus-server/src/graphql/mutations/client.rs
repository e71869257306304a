use async_graphql::*;
use campus_core::services::NewClient;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::helpers::parse_id;
use crate::graphql::types::Client;

#[derive(Default)]
pub struct ClientMutation;

#[Object]
impl ClientMutation {
    /// Create a new client
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let context = ctx.data::<GraphQLContext>()?;
        let client = context
            .clients()
            .create(NewClient { name, email, phone })
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(Client::from(client))
    }

    /// Delete a client. Its projects are kept and their `client` becomes null.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let context = ctx.data::<GraphQLContext>()?;
        let id = parse_id("id", &id)?;
        let client = context
            .clients()
            .delete(id)
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(client.map(Client::from))
    }
}
