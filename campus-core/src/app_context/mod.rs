use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{ClientService, GroupService, ProjectService, UserService};

/// Shared application context: one service per entity, built once at startup
/// and handed to the GraphQL layer.
#[derive(Clone)]
pub struct AppContext {
    client_service: Arc<ClientService>,
    project_service: Arc<ProjectService>,
    group_service: Arc<GroupService>,
    user_service: Arc<UserService>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        let client_service = Arc::new(ClientService::new(db.clone()));
        let project_service = Arc::new(ProjectService::new(db.clone()));
        let group_service = Arc::new(GroupService::new(db.clone()));
        let user_service = Arc::new(UserService::new(db));

        Self {
            client_service,
            project_service,
            group_service,
            user_service,
        }
    }

    pub fn clients(&self) -> &Arc<ClientService> {
        &self.client_service
    }

    pub fn projects(&self) -> &Arc<ProjectService> {
        &self.project_service
    }

    pub fn groups(&self) -> &Arc<GroupService> {
        &self.group_service
    }

    pub fn users(&self) -> &Arc<UserService> {
        &self.user_service
    }
}
