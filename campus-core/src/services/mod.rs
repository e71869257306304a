pub mod client_service;
pub mod group_service;
pub mod project_service;
pub mod user_service;
pub mod validation;

pub use client_service::{ClientService, NewClient};
pub use group_service::{GroupService, NewGroup};
pub use project_service::{NewProject, ProjectService, ProjectUpdate};
pub use user_service::{NewUser, UserService};
pub use validation::ValidationService;
