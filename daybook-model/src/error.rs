//! Error types for entity conversion.

use crate::history::DuplicateValueError;
use daybook_types::ValidationError;
use thiserror::Error;

/// Result type for cast/conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised by the cast dispatcher and the DTO reconstruction paths.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested (source, target) pair is not in the source type's
    /// conversion table. Deterministic: the same pair fails the same way on
    /// every call.
    #[error("cannot convert {source_type} to {target_type}")]
    Unsupported {
        source_type: String,
        target_type: String,
    },

    /// A construct-from-linked-entity entry point failed. Wraps the root
    /// cause exactly once; the message text is part of the contract with
    /// existing consumers.
    #[error("Error creating {type_name} object")]
    Creation {
        type_name: &'static str,
        #[source]
        source: Box<ConvertError>,
    },

    /// A nested value the conversion depends on was unexpectedly absent.
    #[error("missing value for {field} while converting {type_name}")]
    Missing {
        type_name: &'static str,
        field: &'static str,
    },

    /// A stored history log contained a repeated value.
    #[error(transparent)]
    Duplicate(#[from] DuplicateValueError),

    /// Stored data failed the same bounds the setters enforce.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConvertError {
    /// Wraps `inner` as a [`ConvertError::Creation`] for `type_name`.
    ///
    /// An inner error that is already a `Creation` is passed through
    /// unchanged — the wrap is applied at most once along a call chain.
    #[must_use]
    pub fn wrap_creation(type_name: &'static str, inner: ConvertError) -> ConvertError {
        match inner {
            wrapped @ ConvertError::Creation { .. } => wrapped,
            other => ConvertError::Creation {
                type_name,
                source: Box::new(other),
            },
        }
    }
}
