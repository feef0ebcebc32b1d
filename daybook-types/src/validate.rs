//! Property validation helpers.
//!
//! A validated setter calls one or more of these BEFORE assigning, so a
//! rejected write leaves the field (and the entity's modification timestamp)
//! untouched. The bounds here are the ones shared across the organizer
//! entities; per-entity setters choose which checks apply to each field.

use crate::ValidationError;

/// Maximum length for name-like fields (names, titles, usernames).
pub const NAME_MAX: usize = 100;

/// Maximum length for description-like fields (notes, details).
pub const DESCRIPTION_MAX: usize = 1000;

/// Rejects negative numeric values.
pub fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Range { field, value });
    }
    Ok(())
}

/// Rejects strings longer than `max` characters.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::Length { field, max, len });
    }
    Ok(())
}

/// Rejects empty or whitespace-only strings.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Applies `max_len` to an optional string, accepting `None`.
pub fn max_len_opt(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}
