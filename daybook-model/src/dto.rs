//! Transfer objects for the organizer entities.
//!
//! DTOs are plain camelCase serde records with no invariants of their own.
//! They carry timestamps verbatim so entities can be reconstructed from
//! storage, and they serialize directly through serde — the entity-side
//! [`ToJson`](crate::json::ToJson) machinery is not involved. Fields marked
//! omit-if-default (`refId`, `refType`) disappear from the wire instead of
//! appearing with their sentinel.

use crate::convert::{self, BuiltTarget, Cast};
use crate::linked::GenericEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::TypeId;

fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    // The organization back-reference is not carried on the transfer object.
    pub address: Option<AddressDto>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDto {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub contacts: Option<Vec<ContactDto>>,
    pub address: Option<AddressDto>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubAccountDto {
    pub id: i64,
    pub name: String,
    pub username: Option<String>,
    pub notes: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

/// Transfer shape for accounts. At most one of the linked payload fields is
/// populated, mirroring the entity-side slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub ref_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
    pub user: Option<UserDto>,
    pub contact: Option<ContactDto>,
    pub organization: Option<OrganizationDto>,
    pub sub_account: Option<SubAccountDto>,
    pub generic: Option<GenericEntity>,
    pub sub_accounts: Option<Vec<SubAccountDto>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordDto {
    pub id: i64,
    pub name: String,
    pub secret: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    /// Every value the secret has held, oldest first. `None` entries are
    /// explicit null markers.
    pub previous_secrets: Vec<Option<String>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub assignments: Option<Vec<AssignmentDto>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentDto {
    pub id: i64,
    pub title: String,
    pub details: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: i64,
    pub due_at: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

// ── DTO → DTO passthrough casts ──────────────────────────────────

impl Cast for ContactDto {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<UserDto>() {
            convert::entry(Ok(UserDto {
                id: self.id,
                username: self.name.clone(),
                display_name: Some(self.name.clone()),
                email: self.email.clone(),
                date_created: self.date_created,
                date_modified: self.date_modified,
            }))
        } else {
            None
        }
    }
}
