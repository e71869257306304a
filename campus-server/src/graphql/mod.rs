pub mod context;
pub mod errors;
pub mod helpers;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod types;

pub use context::GraphQLContext;
pub use schema::*;
