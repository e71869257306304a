use std::sync::Arc;

use campus_core::app_context::AppContext;
use campus_core::services::{ClientService, GroupService, ProjectService, UserService};

#[derive(Clone)]
pub struct GraphQLContext {
    pub app: Arc<AppContext>,
}

impl GraphQLContext {
    pub fn new(app: Arc<AppContext>) -> Self {
        Self { app }
    }

    pub fn clients(&self) -> &ClientService {
        self.app.clients()
    }

    pub fn projects(&self) -> &ProjectService {
        self.app.projects()
    }

    pub fn groups(&self) -> &GroupService {
        self.app.groups()
    }

    pub fn users(&self) -> &UserService {
        self.app.users()
    }
}
