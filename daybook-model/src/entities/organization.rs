//! Organizations and their member contacts.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::OrganizationDto;
use crate::entities::{Address, Contact, NullCollectionPolicy, restored_stamp};
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Organization {
    id: i64,
    name: String,
    website: Option<String>,
    contacts: Option<Vec<Contact>>,
    address: Option<Box<Address>>,
    stamp: AuditStamp,
}

impl Organization {
    /// This entity keeps a null contact list distinct from an empty one.
    const CONTACTS_POLICY: NullCollectionPolicy = NullCollectionPolicy::Preserve;

    /// A blank organization: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs an organization from its transfer object, re-checking
    /// field bounds. Nested contacts and the address are rebuilt
    /// recursively.
    pub fn from_dto(dto: &OrganizationDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        let contacts = match &dto.contacts {
            None => None,
            Some(dtos) => Some(
                dtos.iter()
                    .map(Contact::from_dto)
                    .collect::<ConvertResult<Vec<Contact>>>()?,
            ),
        };
        let address = match &dto.address {
            Some(a) => Some(Box::new(Address::from_dto(a)?)),
            None => None,
        };
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            website: dto.website.clone(),
            contacts,
            address,
            stamp: restored_stamp(dto.date_created, dto.date_modified),
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn contacts(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.stamp.created_at()
    }

    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.stamp.modified_at()
    }

    pub fn set_id(&mut self, id: i64) -> ValidationResult<()> {
        validate::non_negative("id", id)?;
        self.id = id;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate::required("name", &name)?;
        validate::max_len("name", &name, validate::NAME_MAX)?;
        self.name = name;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_website(&mut self, website: Option<String>) {
        self.website = website;
        self.stamp.touch();
    }

    pub fn set_contacts(&mut self, contacts: Option<Vec<Contact>>) {
        self.contacts = Self::CONTACTS_POLICY.apply(contacts);
        self.stamp.touch();
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address.map(Box::new);
        self.stamp.touch();
    }

    fn to_dto(&self) -> ConvertResult<OrganizationDto> {
        Ok(OrganizationDto {
            id: self.id,
            name: self.name.clone(),
            website: self.website.clone(),
            contacts: convert::cast_collection(&self.contacts)?,
            address: convert::cast_nested(self.address.as_deref())?,
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        })
    }
}

impl Cast for Organization {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<OrganizationDto>() {
            convert::entry(self.to_dto())
        } else {
            None
        }
    }
}

impl ToJson for Organization {
    fn json_key(&self) -> (&'static str, i64) {
        ("Organization", self.id)
    }

    fn project(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        json::push_str(&mut map, "website", self.website.as_deref());
        map.insert(
            "contacts".to_owned(),
            json::collection(&self.contacts, keys, guard),
        );
        json::push_nested(&mut map, "address", self.address.as_deref(), keys, guard);
        map
    }
}
