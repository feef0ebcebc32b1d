//! Core type definitions for Daybook.
//!
//! This crate defines the fundamental, entity-agnostic types used throughout
//! the organizer model:
//! - Audit timestamps (creation time + mutation-tracked modification time)
//! - Property validation helpers and the validation error taxonomy
//! - The region-lookup collaborator interface for display formatting
//!
//! Concrete entities (contacts, accounts, passwords, projects, etc.) live in
//! `daybook-model`, not here.

mod error;
mod region;
mod stamp;
pub mod validate;

pub use error::ValidationError;
pub use region::{Region, RegionLookup};
pub use stamp::AuditStamp;

/// Result type alias for validated property assignment.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
