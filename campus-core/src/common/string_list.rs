//! List-valued document fields (group emails, user groups) are stored as a
//! JSON array in a single text column.

use crate::errors::CoreError;

pub fn encode(values: &[String]) -> Result<String, CoreError> {
    serde_json::to_string(values)
        .map_err(|e| CoreError::internal("Failed to encode string list").with_source(e))
}

/// Malformed or missing content decodes to an empty list.
pub fn decode(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}
