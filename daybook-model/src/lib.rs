//! Entity and transfer-object model for Daybook.
//!
//! This crate is the conversion-and-mutation-tracking engine behind the
//! organizer's domain entities:
//! - [`Cast`] — runtime-dispatched conversion of an entity into a transfer
//!   object or sibling-entity shape, from a closed per-type table
//! - [`LinkedSlot`] / [`LinkedEntity`] — the single polymorphic association
//!   an account may hold, with derived reference id and type discriminator
//! - [`PreviousValues`] — append-only value history that forbids reuse
//! - [`ToJson`] — JSON projection with pluggable key naming, null/empty
//!   collection handling, and cycle breaking
//! - the concrete entities (`entities`) and their transfer objects (`dto`)
//!
//! Everything here is synchronous and in-memory; persistence and transport
//! live elsewhere.

pub mod convert;
mod dto;
mod entities;
mod error;
mod history;
pub mod json;
mod linked;

pub use convert::Cast;
pub use dto::{
    AccountDto, AddressDto, AssignmentDto, ContactDto, OrganizationDto, PasswordDto, ProjectDto,
    SubAccountDto, UserDto,
};
pub use entities::{
    Account, Address, Assignment, Contact, NullCollectionPolicy, Organization, Password, Project,
    SubAccount, User,
};
pub use error::{ConvertError, ConvertResult};
pub use history::{DuplicateValueError, PreviousValues};
pub use json::{CycleGuard, JsonKeys, ToJson};
pub use linked::{GenericEntity, LinkedEntity, LinkedSlot};
