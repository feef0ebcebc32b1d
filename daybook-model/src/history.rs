//! Append-only history of previously used values.
//!
//! Password-like entities keep every value a tracked field has ever held and
//! refuse to accept a value that was used before. Equality is by content and
//! case-sensitive: `"Pw"` and `"pw"` are distinct, while two independently
//! produced empty strings collide. An explicit null marker is recorded like
//! any other value and collides with a prior null marker.

use thiserror::Error;

/// A tracked field was assigned a value it has already held.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the {role} value has already been used")]
pub struct DuplicateValueError {
    /// The role of the tracked field (e.g. "password").
    pub role: String,
}

/// Ordered, append-only log of previous values for one tracked field.
///
/// Values are never removed or reordered. The backing sequence exposed by
/// [`values`](Self::values) is identity-stable: repeated reads return the
/// same slice, not a defensive copy, so callers may compare pointers to
/// detect intervening mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousValues {
    role: String,
    values: Vec<Option<String>>,
}

impl PreviousValues {
    /// Creates an empty log for the named field role.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            values: Vec::new(),
        }
    }

    /// Rebuilds a log from stored values, re-checking the no-reuse invariant.
    ///
    /// Fails if the stored sequence itself contains a repeated value.
    pub fn from_recorded<I>(role: impl Into<String>, values: I) -> Result<Self, DuplicateValueError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut log = Self::new(role);
        for value in values {
            log.record(value.as_deref())?;
        }
        Ok(log)
    }

    /// Appends `value` to the log, rejecting any value already present.
    pub fn record(&mut self, value: Option<&str>) -> Result<(), DuplicateValueError> {
        if self.contains(value) {
            return Err(DuplicateValueError {
                role: self.role.clone(),
            });
        }
        self.values.push(value.map(str::to_owned));
        Ok(())
    }

    /// Returns true if `value` has been recorded before.
    #[must_use]
    pub fn contains(&self, value: Option<&str>) -> bool {
        self.values.iter().any(|prior| prior.as_deref() == value)
    }

    /// The role of the tracked field.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The recorded values, oldest first. Identity-stable across reads.
    #[must_use]
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
