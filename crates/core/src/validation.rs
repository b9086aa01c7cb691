//! Request-input checks shared by every resource.
//!
//! These run before any store access so malformed requests never reach the
//! database.

use validator::ValidationErrors;

use crate::error::CoreError;
use crate::types::DbId;

/// Message for a request whose path parameter is missing.
pub const PARAMS_MISSING: &str = "Incomplete Request: Params Missing";

/// Message for a create request lacking required body fields.
pub const FIELDS_MISSING: &str = "Incomplete Request: Fields Missing";

/// Message for an update request lacking required body fields.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Reject an empty path parameter with `message`.
pub fn require_param<'a>(raw: &'a str, message: &str) -> Result<&'a str, CoreError> {
    if raw.is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(raw)
}

/// Parse a record identifier received as a path segment.
///
/// Identifiers are positive integers; anything else is a malformed request.
pub fn parse_id(entity: &str, raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!("Invalid {entity} ID '{raw}'"))),
    }
}

/// Convert `validator` output into a single [`CoreError::Validation`].
///
/// Field names are listed in sorted order so the message is stable.
pub fn missing_fields(prefix: &str, errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    CoreError::Validation(format!("{prefix}: {}", fields.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_param_rejects_empty() {
        let err = require_param("", PARAMS_MISSING).unwrap_err();
        assert!(matches!(err, CoreError::Validation(m) if m == PARAMS_MISSING));
        assert_eq!(require_param("CS101", PARAMS_MISSING).unwrap(), "CS101");
    }

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("Circular", "42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_garbage_zero_and_negative() {
        for raw in ["abc", "0", "-7", "4.2", ""] {
            let err = parse_id("Circular", raw).unwrap_err();
            assert!(
                matches!(&err, CoreError::Validation(m) if m == &format!("Invalid Circular ID '{raw}'")),
                "unexpected error for {raw:?}: {err:?}"
            );
        }
    }

    #[test]
    fn missing_fields_lists_sorted_field_names() {
        let mut errors = ValidationErrors::new();
        errors.add("title", validator::ValidationError::new("required"));
        errors.add("description", validator::ValidationError::new("required"));

        let err = missing_fields(FIELDS_MISSING, &errors);
        assert!(matches!(
            err,
            CoreError::Validation(m) if m == "Incomplete Request: Fields Missing: description, title"
        ));
    }
}
