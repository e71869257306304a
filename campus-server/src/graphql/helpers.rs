use async_graphql::{Error, ID};

use crate::graphql::errors::StructuredError;

/// Store keys are integers; anything else is rejected before touching the store.
pub fn parse_id(field: &str, id: &ID) -> Result<i32, Error> {
    id.parse::<i32>()
        .map_err(|_| StructuredError::validation(field, format!("'{}' is not a valid id", id.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_parses() {
        assert_eq!(parse_id("id", &ID::from("17")).unwrap(), 17);
    }

    #[test]
    fn object_id_like_value_is_rejected() {
        let err = parse_id("clientId", &ID::from("64b7f0c2e1a2b3c4d5e6f708")).unwrap_err();
        assert!(err.message.contains("clientId"));
    }
}
