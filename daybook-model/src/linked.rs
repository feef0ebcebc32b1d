//! The linked-entity slot: one polymorphic association per account.
//!
//! An account may point at exactly one of several unrelated concrete types.
//! The "exactly one" invariant is enforced by construction: the payload is a
//! sum type, so storing a new kind structurally clears every other kind.
//! The reference id and the type discriminator are derived projections of
//! whichever variant is active — they are never independently settable.

use crate::entities::{Contact, Organization, SubAccount, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An arbitrary entity payload for links outside the built-in kinds.
///
/// Carries its own kind string and an opaque JSON body, so consumers can
/// link anything that has an identity without the core knowing its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericEntity {
    pub id: i64,
    pub kind: String,
    pub data: Value,
}

impl GenericEntity {
    /// Creates a generic payload with no body.
    #[must_use]
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            data: Value::Null,
        }
    }
}

/// The payload of a linked-entity slot. Exactly one variant is ever active.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkedEntity {
    User(User),
    Contact(Contact),
    Organization(Organization),
    SubAccount(SubAccount),
    Generic(GenericEntity),
}

impl LinkedEntity {
    /// The payload's own id, projected as the slot's reference id.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::User(u) => u.id(),
            Self::Contact(c) => c.id(),
            Self::Organization(o) => o.id(),
            Self::SubAccount(s) => s.id(),
            Self::Generic(g) => g.id,
        }
    }

    /// The runtime type discriminator for the active kind.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::User(_) => "User",
            Self::Contact(_) => "Contact",
            Self::Organization(_) => "Organization",
            Self::SubAccount(_) => "SubAccount",
            Self::Generic(g) => &g.kind,
        }
    }
}

/// Holder for the single polymorphic association of an entity.
///
/// `ref_id` and `ref_type` stay consistent with the active variant at all
/// times, including when the slot is constructed around a pre-built payload
/// via [`with`](Self::with) instead of going through [`set`](Self::set).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedSlot {
    link: Option<LinkedEntity>,
}

impl LinkedSlot {
    /// An empty slot: no payload, reference id 0, no discriminator.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a slot around a pre-built payload.
    #[must_use]
    pub fn with(link: LinkedEntity) -> Self {
        Self { link: Some(link) }
    }

    /// Replaces the slot's contents. `None` clears every kind; a payload
    /// stores its kind and clears all others (by construction of the sum
    /// type) and rederives the reference id and type discriminator.
    pub fn set(&mut self, link: Option<LinkedEntity>) {
        self.link = link;
    }

    /// Clears the slot.
    pub fn clear(&mut self) {
        self.link = None;
    }

    /// The active payload, if any.
    #[must_use]
    pub fn get(&self) -> Option<&LinkedEntity> {
        self.link.as_ref()
    }

    /// Derived reference id: the payload's id, or 0 when the slot is empty.
    /// 0 is the omit-if-default sentinel at the JSON boundary.
    #[must_use]
    pub fn ref_id(&self) -> i64 {
        self.link.as_ref().map_or(0, LinkedEntity::id)
    }

    /// Derived type discriminator for the active payload.
    #[must_use]
    pub fn ref_type(&self) -> Option<&str> {
        self.link.as_ref().map(LinkedEntity::type_name)
    }

    /// The payload when the active kind is `User`.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.link {
            Some(LinkedEntity::User(u)) => Some(u),
            _ => None,
        }
    }

    /// The payload when the active kind is `Contact`.
    #[must_use]
    pub fn contact(&self) -> Option<&Contact> {
        match &self.link {
            Some(LinkedEntity::Contact(c)) => Some(c),
            _ => None,
        }
    }

    /// The payload when the active kind is `Organization`.
    #[must_use]
    pub fn organization(&self) -> Option<&Organization> {
        match &self.link {
            Some(LinkedEntity::Organization(o)) => Some(o),
            _ => None,
        }
    }

    /// The payload when the active kind is `SubAccount`.
    #[must_use]
    pub fn sub_account(&self) -> Option<&SubAccount> {
        match &self.link {
            Some(LinkedEntity::SubAccount(s)) => Some(s),
            _ => None,
        }
    }

    /// The payload when the active kind is generic.
    #[must_use]
    pub fn generic(&self) -> Option<&GenericEntity> {
        match &self.link {
            Some(LinkedEntity::Generic(g)) => Some(g),
            _ => None,
        }
    }

    /// True when no payload is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.link.is_none()
    }
}
