use async_graphql::*;
use campus_core::services::NewUser;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::User;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Register a user with no groups. The password hash is stored as given.
    async fn register(
        &self,
        ctx: &Context<'_>,
        user_name: String,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
    ) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context
            .users()
            .register(NewUser {
                user_name,
                first_name,
                last_name,
                email,
                password_hash,
            })
            .await
            .map_err(StructuredError::from_core_error)?;

        Ok(User::from(user))
    }
}
