//! Error types shared by the service layer.
//!
//! Every service method returns [`CoreResult`]. Store failures are classified
//! (see [`crate::common::db_errors`]) before they become a [`CoreError`], so the
//! transport layer only ever sees one of the [`CoreErrorKind`] categories.

pub mod core_error;

pub use core_error::{CoreError, CoreErrorKind};

/// Result type alias for service operations
pub type CoreResult<T> = Result<T, CoreError>;
