//! Error types for property validation.

use thiserror::Error;

/// Errors raised by a validated setter before any state is mutated.
///
/// Rejection is atomic: when a setter returns one of these, the field keeps
/// its previous value and the entity's modification timestamp is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric value fell outside the field's allowed bounds.
    #[error("{field} must not be negative (got {value})")]
    Range { field: &'static str, value: i64 },

    /// A string exceeded the field's maximum length.
    #[error("{field} must be at most {max} characters (got {len})")]
    Length {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// A required string was empty or whitespace-only.
    #[error("{field} is required and must not be blank")]
    Required { field: &'static str },
}

impl ValidationError {
    /// The name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Range { field, .. } | Self::Length { field, .. } | Self::Required { field } => {
                field
            }
        }
    }
}
