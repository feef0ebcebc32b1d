//! Application users.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::UserDto;
use crate::entities::{Contact, restored_stamp};
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    id: i64,
    username: String,
    display_name: Option<String>,
    email: Option<String>,
    stamp: AuditStamp,
}

impl User {
    /// A blank user: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a user from its transfer object, re-checking the same
    /// bounds the setters enforce.
    pub fn from_dto(dto: &UserDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("username", &dto.username, validate::NAME_MAX)?;
        validate::max_len_opt("displayName", dto.display_name.as_deref(), validate::NAME_MAX)?;
        Ok(Self {
            id: dto.id,
            username: dto.username.clone(),
            display_name: dto.display_name.clone(),
            email: dto.email.clone(),
            stamp: restored_stamp(dto.date_created, dto.date_modified),
        })
    }

    /// Sibling-conversion constructor: scalar fields and stamp supplied by
    /// another entity's cast table.
    pub(crate) fn restored(
        id: i64,
        username: String,
        email: Option<String>,
        stamp: AuditStamp,
    ) -> Self {
        Self {
            id,
            username,
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
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
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

    pub fn set_username(&mut self, username: impl Into<String>) -> ValidationResult<()> {
        let username = username.into();
        validate::required("username", &username)?;
        validate::max_len("username", &username, validate::NAME_MAX)?;
        self.username = username;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_display_name(&mut self, display_name: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("displayName", display_name.as_deref(), validate::NAME_MAX)?;
        self.display_name = display_name;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
        self.stamp.touch();
    }

    fn to_dto(&self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        }
    }

    /// Sibling-entity view: a contact named after this user. Timestamps
    /// carry over verbatim.
    fn to_contact(&self) -> Contact {
        let name = self
            .display_name
            .clone()
            .unwrap_or_else(|| self.username.clone());
        Contact::restored(self.id, name, self.email.clone(), self.stamp)
    }
}

impl Cast for User {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<UserDto>() {
            convert::entry(Ok(self.to_dto()))
        } else if target == TypeId::of::<Contact>() {
            convert::entry(Ok(self.to_contact()))
        } else {
            None
        }
    }
}

impl ToJson for User {
    fn json_key(&self) -> (&'static str, i64) {
        ("User", self.id)
    }

    fn project(&self, keys: &JsonKeys, _guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("username".to_owned(), Value::String(self.username.clone()));
        json::push_str(&mut map, "displayName", self.display_name.as_deref());
        json::push_str(&mut map, "email", self.email.as_deref());
        map
    }
}
