use crate::errors::{CoreError, CoreResult};

/// Required-field checks applied before anything is written.
///
/// Field names are reported the way API callers spell them (`groupName`,
/// not `group_name`).
pub struct ValidationService;

impl ValidationService {
    /// A required string must be present and non-empty. Whitespace is kept
    /// as-is and counts as content.
    pub fn require(field: &str, value: &str) -> CoreResult<()> {
        if value.is_empty() {
            return Err(CoreError::invalid_field(field, "is required"));
        }
        Ok(())
    }

    pub fn require_all(fields: &[(&str, &str)]) -> CoreResult<()> {
        for (field, value) in fields {
            Self::require(field, value)?;
        }
        Ok(())
    }

    pub fn require_coordinate(field: &str, value: f64) -> CoreResult<()> {
        if !value.is_finite() {
            return Err(CoreError::invalid_field(field, "must be a finite number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreErrorKind;

    #[test]
    fn empty_string_is_rejected() {
        let err = ValidationService::require("name", "").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert_eq!(err.message(), "name: is required");
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(ValidationService::require("name", " ").is_ok());
    }

    #[test]
    fn require_all_reports_first_missing_field() {
        let err = ValidationService::require_all(&[("name", "Acme"), ("email", ""), ("phone", "")])
            .unwrap_err();
        assert_eq!(
            err.fields().and_then(|f| f.get("field")).map(String::as_str),
            Some("email")
        );
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        assert!(ValidationService::require_coordinate("latitude", f64::NAN).is_err());
        assert!(ValidationService::require_coordinate("latitude", 40.7).is_ok());
    }
}
