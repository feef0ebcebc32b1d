//! Audit timestamps for mutation-tracked entities.
//!
//! Every entity carries an immutable creation time and a nullable
//! modification time. The modification time starts unset on freshly created
//! entities and is stamped by every qualifying setter call — including
//! writes that assign the value already held. Several behaviors downstream
//! (completion-date clearing, sync dirty detection) depend on "a setter ran",
//! not on "the value changed", so the stamp never short-circuits.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Creation/modification timestamp pair for one entity instance.
///
/// Invariants:
/// - `created_at` is set once, at construction, and never reassigned.
/// - `modified_at` is `None` until the first post-construction mutation;
///   it is never auto-initialized to "now" by a constructor.
/// - When `modified_at` is set, `created_at <= modified_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
}

impl AuditStamp {
    /// Creates a stamp for a brand-new entity: created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    /// Creates a stamp from stored values, verbatim.
    ///
    /// This is the reconstruction path: both timestamps come from the caller
    /// (typically a transfer object loaded from storage) and are not
    /// reinterpreted.
    #[must_use]
    pub const fn restored(
        created_at: DateTime<Utc>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification time, if the entity has been mutated.
    #[must_use]
    pub const fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Records a mutation at the current wall-clock time.
    ///
    /// Repeated touches are strictly increasing: if the clock has not
    /// advanced past the previous modification time, the stamp is bumped by
    /// one nanosecond instead of reusing the same instant.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.modified_at = Some(match self.modified_at {
            Some(prev) if now <= prev => prev + Duration::nanoseconds(1),
            _ => now,
        });
    }
}

impl Default for AuditStamp {
    fn default() -> Self {
        Self::new()
    }
}
