//! Shared input checks used by option validation

use crate::error::ValidationError;

/// Non-empty after trimming.
pub fn valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Non-empty and limited to `[A-Za-z0-9-._]`. Identifiers and names that
/// end up in a request path must pass this check.
pub fn valid_string_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// `Err(InvalidId(what))` unless `id` is a valid identifier.
pub fn require_id(id: &str, what: &'static str) -> Result<(), ValidationError> {
    if valid_string_id(id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidId(what))
    }
}

/// Name checks shared by create options: required, then well-formed.
pub fn require_name(name: &str, field: &'static str) -> Result<(), ValidationError> {
    if !valid_string(name) {
        return Err(ValidationError::RequiredField(field));
    }
    if !valid_string_id(name) {
        return Err(ValidationError::InvalidValue(field));
    }
    Ok(())
}

/// Relation list checks: `None` is a missing field, `Some([])` falls short
/// of the minimum.
pub fn require_list<'a, T>(
    items: Option<&'a [T]>,
    field: &'static str,
) -> Result<&'a [T], ValidationError> {
    match items {
        None => Err(ValidationError::RequiredField(field)),
        Some([]) => Err(ValidationError::MinCount { field, min: 1 }),
        Some(items) => Ok(items),
    }
}
