//! People in the address book.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::ContactDto;
use crate::entities::{Address, Organization, User, restored_stamp};
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    notes: Option<String>,
    address: Option<Box<Address>>,
    /// Back-reference to the owning organization. Not carried on the
    /// transfer object; broken by the cycle guard during JSON projection.
    organization: Option<Box<Organization>>,
    stamp: AuditStamp,
}

impl Contact {
    /// A blank contact: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a contact from its transfer object, re-checking the
    /// same bounds the setters enforce.
    pub fn from_dto(dto: &ContactDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        validate::max_len_opt("notes", dto.notes.as_deref(), validate::DESCRIPTION_MAX)?;
        let address = match &dto.address {
            Some(a) => Some(Box::new(Address::from_dto(a)?)),
            None => None,
        };
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            notes: dto.notes.clone(),
            address,
            organization: None,
            stamp: restored_stamp(dto.date_created, dto.date_modified),
        })
    }

    /// Sibling-conversion constructor: scalar fields and stamp supplied by
    /// another entity's cast table.
    pub(crate) fn restored(
        id: i64,
        name: String,
        email: Option<String>,
        stamp: AuditStamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            stamp,
            ..Self::default()
        }
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
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_deref()
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

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
        self.stamp.touch();
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
        self.stamp.touch();
    }

    pub fn set_notes(&mut self, notes: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("notes", notes.as_deref(), validate::DESCRIPTION_MAX)?;
        self.notes = notes;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address.map(Box::new);
        self.stamp.touch();
    }

    pub fn set_organization(&mut self, organization: Option<Organization>) {
        self.organization = organization.map(Box::new);
        self.stamp.touch();
    }

    fn to_dto(&self) -> ConvertResult<ContactDto> {
        Ok(ContactDto {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
            address: convert::cast_nested(self.address.as_deref())?,
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        })
    }

    /// Sibling-entity view: a user whose username is this contact's name.
    fn to_user(&self) -> User {
        User::restored(self.id, self.name.clone(), self.email.clone(), self.stamp)
    }
}

impl Cast for Contact {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<ContactDto>() {
            convert::entry(self.to_dto())
        } else if target == TypeId::of::<User>() {
            convert::entry(Ok(self.to_user()))
        } else {
            None
        }
    }
}

impl ToJson for Contact {
    fn json_key(&self) -> (&'static str, i64) {
        ("Contact", self.id)
    }

    fn project(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        json::push_str(&mut map, "email", self.email.as_deref());
        json::push_str(&mut map, "phone", self.phone.as_deref());
        json::push_str(&mut map, "notes", self.notes.as_deref());
        json::push_nested(&mut map, "address", self.address.as_deref(), keys, guard);
        json::push_nested(
            &mut map,
            "organization",
            self.organization.as_deref(),
            keys,
            guard,
        );
        map
    }
}
