//! Runtime-dispatched conversion between entities and transfer objects.
//!
//! Every convertible type carries a closed, explicit table of supported
//! targets: [`Cast::build`] matches the requested [`TypeId`] against that
//! table and returns a builder result, or `None` for anything absent.
//! [`Cast::cast`] resolves the table and surfaces misses as
//! [`ConvertError::Unsupported`] naming both types.
//!
//! Conversion is not symmetric — a type may cast to a sibling without the
//! sibling casting back. Each direction is a separate table entry; nothing
//! is inferred.

use crate::error::{ConvertError, ConvertResult};
use std::any::{Any, TypeId, type_name};

/// A table entry: the built target, boxed for runtime dispatch.
pub type BuiltTarget = ConvertResult<Box<dyn Any>>;

/// Strips the module path from a type name (`a::b::Contact` → `Contact`).
#[must_use]
pub fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn unsupported<S, T>() -> ConvertError {
    ConvertError::Unsupported {
        source_type: short_type_name::<S>().to_owned(),
        target_type: short_type_name::<T>().to_owned(),
    }
}

/// Conversion into a caller-chosen target shape.
pub trait Cast: Sized + 'static {
    /// Consults this type's conversion table for `target`.
    ///
    /// `None` means the (source, target) pair is unsupported. Errors from a
    /// builder (failures while recursing into nested entities) are returned
    /// as `Some(Err(..))` and propagate unchanged.
    fn build(&self, target: TypeId) -> Option<BuiltTarget>;

    /// Builds a `T` from this value, or fails with a conversion error
    /// naming both the concrete source type and the requested target.
    fn cast<T: Any>(&self) -> ConvertResult<T> {
        match self.build(TypeId::of::<T>()) {
            Some(Ok(built)) => match built.downcast::<T>() {
                Ok(value) => Ok(*value),
                // A builder produced a shape that does not match its key.
                Err(_) => Err(unsupported::<Self, T>()),
            },
            Some(Err(e)) => Err(e),
            None => {
                tracing::debug!(
                    source = short_type_name::<Self>(),
                    target = short_type_name::<T>(),
                    "cast target not in conversion table"
                );
                Err(unsupported::<Self, T>())
            }
        }
    }
}

/// Wraps a builder result as a conversion-table entry.
pub fn entry<T: Any>(built: ConvertResult<T>) -> Option<BuiltTarget> {
    Some(built.map(|value| Box::new(value) as Box<dyn Any>))
}

/// Casts a single nested entity, preserving absence.
pub fn cast_nested<S: Cast, T: Any>(source: Option<&S>) -> ConvertResult<Option<T>> {
    source.map(|s| s.cast()).transpose()
}

/// Casts an entity collection element-wise.
///
/// A null collection stays null through the dispatcher — it is never
/// normalized to an empty one here. (Setter-layer null handling is a
/// separate, per-entity policy; see `entities::NullCollectionPolicy`.)
pub fn cast_collection<S: Cast, T: Any>(items: &Option<Vec<S>>) -> ConvertResult<Option<Vec<T>>> {
    match items {
        None => Ok(None),
        Some(items) => items
            .iter()
            .map(|item| item.cast())
            .collect::<ConvertResult<Vec<T>>>()
            .map(Some),
    }
}
