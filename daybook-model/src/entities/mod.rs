//! The organizer entities.
//!
//! Every entity follows the same pattern: private fields, an [`AuditStamp`]
//! that every setter touches (including no-op writes — downstream behavior
//! depends on "a setter ran", not on value change), validated setters that
//! reject before mutating, a blank `new()` constructor, a `from_dto()`
//! reconstruction constructor that re-checks field bounds and copies
//! timestamps verbatim without touching the stamp, a closed
//! [`Cast`](crate::convert::Cast) table, and a
//! [`ToJson`](crate::json::ToJson) projection.
//!
//! Reconstruction enforces the range and length bounds but not `required`:
//! an entity stored before it was ever named reloads with its blank name.

mod account;
mod address;
mod assignment;
mod contact;
mod organization;
mod password;
mod project;
mod user;

pub use account::{Account, SubAccount};
pub use address::Address;
pub use assignment::Assignment;
pub use contact::Contact;
pub use organization::Organization;
pub use password::Password;
pub use project::Project;
pub use user::User;

use chrono::{DateTime, Utc};
use daybook_types::AuditStamp;

/// How an entity's collection setter treats an incoming null collection.
///
/// The source data is inconsistent on this point, so the choice is an
/// explicit, named per-entity policy instead of a global default. This is a
/// setter-layer concern only — the cast dispatcher always preserves
/// collection-null identity regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCollectionPolicy {
    /// `None` stays `None`.
    Preserve,
    /// `None` becomes an empty collection.
    NormalizeToEmpty,
}

impl NullCollectionPolicy {
    /// Applies this policy to an incoming collection value.
    #[must_use]
    pub fn apply<T>(self, value: Option<Vec<T>>) -> Option<Vec<T>> {
        match (self, value) {
            (Self::NormalizeToEmpty, None) => Some(Vec::new()),
            (_, value) => value,
        }
    }
}

/// Stamp for the reconstruction path: creation time verbatim when supplied,
/// modification time verbatim (never auto-initialized to "now"). A record
/// with a modification time but no creation time takes the modification
/// time as its creation time, keeping creation <= modification.
pub(crate) fn restored_stamp(
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
) -> AuditStamp {
    let created = created.or(modified).unwrap_or_else(Utc::now);
    AuditStamp::restored(created, modified)
}
