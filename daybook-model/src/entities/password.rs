//! Stored credentials with value-reuse protection.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::PasswordDto;
use crate::entities::restored_stamp;
use crate::error::ConvertResult;
use crate::history::{DuplicateValueError, PreviousValues};
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

/// The field role named by duplicate-value errors from this entity.
const SECRET_ROLE: &str = "password";

#[derive(Debug, Clone, PartialEq)]
pub struct Password {
    id: i64,
    name: String,
    secret: Option<String>,
    url: Option<String>,
    notes: Option<String>,
    previous: PreviousValues,
    stamp: AuditStamp,
}

impl Password {
    /// A blank password entry: no secret yet, empty history, created now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            secret: None,
            url: None,
            notes: None,
            previous: PreviousValues::new(SECRET_ROLE),
            stamp: AuditStamp::new(),
        }
    }

    /// Reconstructs a password entry from its transfer object.
    ///
    /// Field bounds are re-checked, and the stored history is replayed
    /// through the log so the no-reuse invariant holds at construction time;
    /// corrupt storage with a repeated value fails here rather than later.
    pub fn from_dto(dto: &PasswordDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        validate::max_len_opt("notes", dto.notes.as_deref(), validate::DESCRIPTION_MAX)?;
        let previous =
            PreviousValues::from_recorded(SECRET_ROLE, dto.previous_secrets.iter().cloned())?;
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            secret: dto.secret.clone(),
            url: dto.url.clone(),
            notes: dto.notes.clone(),
            previous,
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
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The append-only log of every value the secret has held.
    #[must_use]
    pub fn previous(&self) -> &PreviousValues {
        &self.previous
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

    /// Assigns a new secret value.
    ///
    /// The value is recorded in the history log first; a value the secret
    /// has ever held before (including an explicit `None`) is rejected and
    /// nothing changes. On success the secret is replaced and the
    /// modification time stamped.
    pub fn set_secret(&mut self, secret: Option<String>) -> Result<(), DuplicateValueError> {
        self.previous.record(secret.as_deref())?;
        self.secret = secret;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
        self.stamp.touch();
    }

    pub fn set_notes(&mut self, notes: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("notes", notes.as_deref(), validate::DESCRIPTION_MAX)?;
        self.notes = notes;
        self.stamp.touch();
        Ok(())
    }

    fn to_dto(&self) -> PasswordDto {
        PasswordDto {
            id: self.id,
            name: self.name.clone(),
            secret: self.secret.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
            previous_secrets: self.previous.values().to_vec(),
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        }
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new()
    }
}

impl Cast for Password {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<PasswordDto>() {
            convert::entry(Ok(self.to_dto()))
        } else {
            None
        }
    }
}

impl ToJson for Password {
    fn json_key(&self) -> (&'static str, i64) {
        ("Password", self.id)
    }

    fn project(&self, keys: &JsonKeys, _guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        json::push_str(&mut map, "secret", self.secret.as_deref());
        json::push_str(&mut map, "url", self.url.as_deref());
        json::push_str(&mut map, "notes", self.notes.as_deref());
        map.insert(
            "previousSecrets".to_owned(),
            Value::Array(
                self.previous
                    .values()
                    .iter()
                    .map(|v| match v {
                        Some(s) => Value::String(s.clone()),
                        None => Value::Null,
                    })
                    .collect(),
            ),
        );
        map
    }
}
