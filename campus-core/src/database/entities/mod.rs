pub mod clients;
pub mod groups;
pub mod projects;
pub mod users;
