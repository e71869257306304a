// Mutations grouped by entity; merged into a single root below.

mod client;
mod group;
mod project;
mod user;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub client::ClientMutation,
    pub group::GroupMutation,
    pub project::ProjectMutation,
    pub user::UserMutation,
);
