//! Database error categorization
//!
//! Store errors never leave the service layer raw. They are categorized into a
//! [`DbErrorKind`], formatted with the operation that failed, and wrapped into
//! a [`CoreError`].
//!
//! # Examples
//!
//! ```
//! use campus_core::common::db_errors::{DbErrorKind, DbResultExt};
//! use campus_core::CoreErrorKind;
//! use sea_orm::DbErr;
//!
//! let result: Result<(), DbErr> = Err(DbErr::RecordNotFound("client".to_string()));
//! let err = result.db_context("load client").unwrap_err();
//! assert_eq!(err.kind(), CoreErrorKind::NotFound);
//! ```

use sea_orm::DbErr;

use crate::errors::{CoreError, CoreErrorKind};

/// Categories of database errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    /// Record not found (query returned no results)
    NotFound,

    /// Unique constraint violation
    UniqueViolation,

    /// Foreign key constraint violation
    ForeignKeyViolation,

    /// Database connection error
    ConnectionError,

    /// Query timeout
    Timeout,

    /// Transaction deadlock or locked database
    Deadlock,

    /// Unknown/other database error
    Unknown,
}

impl DbErrorKind {
    /// Categorize a sea_orm database error
    pub fn from_db_err(err: &DbErr) -> Self {
        let msg_lower = err.to_string().to_lowercase();
        match err {
            DbErr::RecordNotFound(_) => Self::NotFound,
            DbErr::Conn(_) if msg_lower.contains("timeout") => Self::Timeout,
            DbErr::Conn(_) => Self::ConnectionError,
            DbErr::Exec(_) | DbErr::Query(_) => {
                if msg_lower.contains("unique") || msg_lower.contains("duplicate") {
                    Self::UniqueViolation
                } else if msg_lower.contains("foreign key") {
                    Self::ForeignKeyViolation
                } else if msg_lower.contains("deadlock") || msg_lower.contains("database is locked")
                {
                    Self::Deadlock
                } else if msg_lower.contains("timeout") {
                    Self::Timeout
                } else {
                    Self::Unknown
                }
            }
            _ => Self::Unknown,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionError | Self::Timeout | Self::Deadlock)
    }

    /// The service-level category this store failure surfaces as.
    pub fn core_kind(&self) -> CoreErrorKind {
        match self {
            Self::NotFound => CoreErrorKind::NotFound,
            Self::UniqueViolation => CoreErrorKind::Conflict,
            Self::ForeignKeyViolation => CoreErrorKind::Validation,
            Self::ConnectionError | Self::Timeout | Self::Deadlock => CoreErrorKind::Unavailable,
            Self::Unknown => CoreErrorKind::Internal,
        }
    }
}

/// Format database error with operation context
///
/// ```
/// use campus_core::common::db_errors::*;
/// use sea_orm::DbErr;
///
/// let err = DbErr::RecordNotFound("User not found".to_string());
/// let (kind, message) = format_db_error("find user by name", &err);
///
/// assert_eq!(kind, DbErrorKind::NotFound);
/// assert_eq!(message, "find user by name: record not found");
/// ```
pub fn format_db_error(operation: &str, err: &DbErr) -> (DbErrorKind, String) {
    let kind = DbErrorKind::from_db_err(err);

    let message = match kind {
        DbErrorKind::NotFound => format!("{}: record not found", operation),
        DbErrorKind::UniqueViolation => format!("{}: duplicate key violation", operation),
        DbErrorKind::ForeignKeyViolation => {
            format!("{}: foreign key constraint violation", operation)
        }
        DbErrorKind::ConnectionError => format!("{}: database connection failed", operation),
        DbErrorKind::Timeout => format!("{}: query timeout", operation),
        DbErrorKind::Deadlock => format!("{}: transaction deadlock", operation),
        DbErrorKind::Unknown => format!("{}: database error - {}", operation, err),
    };

    (kind, message)
}

/// Wrap a database error into a [`CoreError`], keeping the original as source.
pub fn db_error(operation: &str, err: DbErr) -> CoreError {
    let (kind, message) = format_db_error(operation, &err);
    if kind.is_retryable() {
        tracing::warn!("{} (retryable)", message);
    } else {
        tracing::error!("{}", message);
    }
    CoreError::new(kind.core_kind(), message).with_source(err)
}

/// Extension trait for store results
pub trait DbResultExt<T> {
    /// Classify a failed store call, naming the operation it belonged to.
    fn db_context(self, operation: &str) -> Result<T, CoreError>;
}

impl<T> DbResultExt<T> for Result<T, DbErr> {
    fn db_context(self, operation: &str) -> Result<T, CoreError> {
        self.map_err(|err| db_error(operation, err))
    }
}
