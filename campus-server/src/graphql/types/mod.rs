pub mod client;
pub mod group;
pub mod project;
pub mod user;

pub use client::*;
pub use group::*;
pub use project::*;
pub use user::*;
