//! Reference-data lookup for administrative subdivisions.
//!
//! The organizer core never ships country/state tables; consumers supply an
//! implementation of [`RegionLookup`]. The lookup is consulted only from
//! display formatting (e.g. `Address::region_display`), never from
//! conversion or validation logic.

use serde::{Deserialize, Serialize};

/// A named administrative subdivision (state, province, territory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub abbreviation: String,
}

impl Region {
    /// Creates a region from its display name and abbreviation.
    #[must_use]
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Resolves a region code (e.g. "WA") to its display data.
///
/// Returning `None` means the code is unknown; callers fall back to showing
/// the raw code.
pub trait RegionLookup {
    fn region(&self, code: &str) -> Option<Region>;
}
