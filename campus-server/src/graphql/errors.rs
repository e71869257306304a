use async_graphql::*;
use campus_core::errors::{CoreError, CoreErrorKind};

/// Error codes for structured error handling
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorCode {
    /// Resource not found (404-equivalent)
    NotFound,
    /// Validation failed (400-equivalent)
    ValidationFailed,
    /// Conflict (409-equivalent)
    Conflict,
    /// Storage unavailable or timing out
    ServiceError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Conflict => "CONFLICT",
            Self::ServiceError => "SERVICE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl From<CoreErrorKind> for ErrorCode {
    fn from(kind: CoreErrorKind) -> Self {
        match kind {
            CoreErrorKind::NotFound => Self::NotFound,
            CoreErrorKind::Validation => Self::ValidationFailed,
            CoreErrorKind::Conflict => Self::Conflict,
            CoreErrorKind::Unavailable => Self::ServiceError,
            CoreErrorKind::Internal => Self::InternalError,
        }
    }
}

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "validation failed" error
    pub fn validation(field: &str, message: impl Into<String>) -> Error {
        Error::new(format!(
            "Validation failed for '{}': {}",
            field,
            message.into()
        ))
        .extend_with(|_, e| {
            e.set("code", ErrorCode::ValidationFailed.as_str());
            e.set("field", field);
        })
    }

    pub fn from_core_error(error: CoreError) -> Error {
        core_error_to_graphql_error(error)
    }
}

/// Converts a service error into a GraphQL error whose `code` extension names
/// the category, with any structured fields copied alongside.
pub fn core_error_to_graphql_error(error: CoreError) -> Error {
    let code = ErrorCode::from(error.kind());
    match code {
        ErrorCode::ServiceError | ErrorCode::InternalError => {
            tracing::error!("{}", error);
        }
        _ => tracing::debug!("{}", error),
    }

    let fields = error.fields().cloned();
    Error::new(error.message().to_string()).extend_with(move |_, e| {
        e.set("code", code.as_str());
        if let Some(fields) = &fields {
            for (key, value) in fields {
                e.set(key.as_str(), value.as_str());
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(error: &Error) -> Option<&Value> {
        error.extensions.as_ref().and_then(|ext| ext.get("code"))
    }

    #[test]
    fn test_validation_error() {
        let error = StructuredError::validation("id", "expected a numeric id");
        assert!(error.message.contains("id"));
        assert!(error.message.contains("numeric"));
        assert_eq!(code_of(&error), Some(&Value::from("VALIDATION_FAILED")));
    }

    #[test]
    fn test_internal_error() {
        let error = StructuredError::from_core_error(CoreError::internal("encode failed"));
        assert_eq!(code_of(&error), Some(&Value::from("INTERNAL_ERROR")));
    }

    #[test]
    fn test_core_error_keeps_message() {
        let error = StructuredError::from_core_error(CoreError::not_found("Group", "Owls"));
        assert_eq!(error.message, "Group 'Owls' not found");
    }
}
