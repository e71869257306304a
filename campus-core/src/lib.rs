pub mod app_context;
pub mod common;
pub mod database;
pub mod errors;
pub mod project_status;
pub mod services;

pub use app_context::AppContext;
pub use errors::{CoreError, CoreErrorKind, CoreResult};
pub use project_status::ProjectStatus;
