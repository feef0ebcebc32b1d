//! Accounts and sub-accounts.
//!
//! An account holds the single polymorphic link of the model (see
//! [`LinkedSlot`]) plus an owned list of sub-accounts. `Account::from_dto`
//! is one of the construct-from-linked-entity entry points: failures while
//! rebuilding the payload surface as a `Creation` wrap with a stable,
//! entity-named message and the root cause attached.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::{AccountDto, SubAccountDto};
use crate::entities::{Contact, NullCollectionPolicy, Organization, User, restored_stamp};
use crate::error::{ConvertError, ConvertResult};
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use crate::linked::{LinkedEntity, LinkedSlot};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    id: i64,
    name: String,
    linked: LinkedSlot,
    sub_accounts: Option<Vec<SubAccount>>,
    stamp: AuditStamp,
}

impl Account {
    /// This entity normalizes a null sub-account list to an empty one at the
    /// setter layer. The cast dispatcher still preserves null end-to-end.
    const SUB_ACCOUNTS_POLICY: NullCollectionPolicy = NullCollectionPolicy::NormalizeToEmpty;

    /// A blank account: empty slot, no sub-accounts, created now.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs an account from its transfer object, re-checking field
    /// bounds.
    ///
    /// Any failure — out-of-bounds stored data, or an error while rebuilding
    /// the linked payload or the sub-accounts — is reported as
    /// "Error creating Account object" with the original error as source.
    /// The wrap is applied at most once.
    pub fn from_dto(dto: &AccountDto) -> ConvertResult<Self> {
        Self::build_from_dto(dto).map_err(|e| ConvertError::wrap_creation("Account", e))
    }

    /// Builds an account directly around a linked payload: the account takes
    /// the payload's display name and holds the payload in its slot.
    ///
    /// Failures (a payload whose name cannot be derived, or a cast miss
    /// while recursing) surface as "Error creating Account object" with the
    /// root cause attached.
    pub fn from_linked(link: LinkedEntity) -> ConvertResult<Self> {
        Self::build_from_linked(link).map_err(|e| ConvertError::wrap_creation("Account", e))
    }

    fn build_from_linked(link: LinkedEntity) -> ConvertResult<Self> {
        let name = match &link {
            // Users have no display name of record; go through their
            // contact representation.
            LinkedEntity::User(user) => user.cast::<Contact>()?.name().to_owned(),
            LinkedEntity::Contact(contact) => contact.name().to_owned(),
            LinkedEntity::Organization(organization) => organization.name().to_owned(),
            LinkedEntity::SubAccount(sub_account) => sub_account.name().to_owned(),
            LinkedEntity::Generic(generic) => generic
                .data
                .get("name")
                .and_then(Value::as_str)
                .ok_or(ConvertError::Missing {
                    type_name: "GenericEntity",
                    field: "name",
                })?
                .to_owned(),
        };
        Ok(Self {
            name,
            linked: LinkedSlot::with(link),
            ..Self::default()
        })
    }

    fn build_from_dto(dto: &AccountDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        let linked = if let Some(user) = &dto.user {
            Some(LinkedEntity::User(User::from_dto(user)?))
        } else if let Some(contact) = &dto.contact {
            Some(LinkedEntity::Contact(Contact::from_dto(contact)?))
        } else if let Some(organization) = &dto.organization {
            Some(LinkedEntity::Organization(Organization::from_dto(
                organization,
            )?))
        } else if let Some(sub_account) = &dto.sub_account {
            Some(LinkedEntity::SubAccount(SubAccount::from_dto(sub_account)?))
        } else {
            dto.generic.clone().map(LinkedEntity::Generic)
        };
        let sub_accounts = match &dto.sub_accounts {
            None => None,
            Some(dtos) => Some(
                dtos.iter()
                    .map(SubAccount::from_dto)
                    .collect::<ConvertResult<Vec<SubAccount>>>()?,
            ),
        };
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            linked: linked.map_or_else(LinkedSlot::empty, LinkedSlot::with),
            sub_accounts,
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

    /// The polymorphic association slot.
    #[must_use]
    pub fn linked(&self) -> &LinkedSlot {
        &self.linked
    }

    #[must_use]
    pub fn sub_accounts(&self) -> Option<&[SubAccount]> {
        self.sub_accounts.as_deref()
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

    /// Replaces the linked payload. `None` clears the slot and its derived
    /// reference id and type discriminator.
    pub fn set_linked(&mut self, link: Option<LinkedEntity>) {
        self.linked.set(link);
        self.stamp.touch();
    }

    pub fn set_sub_accounts(&mut self, sub_accounts: Option<Vec<SubAccount>>) {
        self.sub_accounts = Self::SUB_ACCOUNTS_POLICY.apply(sub_accounts);
        self.stamp.touch();
    }

    fn to_dto(&self) -> ConvertResult<AccountDto> {
        Ok(AccountDto {
            id: self.id,
            name: self.name.clone(),
            ref_id: self.linked.ref_id(),
            ref_type: self.linked.ref_type().map(str::to_owned),
            user: convert::cast_nested(self.linked.user())?,
            contact: convert::cast_nested(self.linked.contact())?,
            organization: convert::cast_nested(self.linked.organization())?,
            sub_account: convert::cast_nested(self.linked.sub_account())?,
            generic: self.linked.generic().cloned(),
            sub_accounts: convert::cast_collection(&self.sub_accounts)?,
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        })
    }
}

impl Cast for Account {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<AccountDto>() {
            convert::entry(self.to_dto())
        } else {
            None
        }
    }
}

impl ToJson for Account {
    fn json_key(&self) -> (&'static str, i64) {
        ("Account", self.id)
    }

    fn project(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        // Derived projections: absent entirely while the slot is empty.
        json::push_nonzero(&mut map, "refId", self.linked.ref_id());
        json::push_if_present(&mut map, "refType", self.linked.ref_type());
        json::push_nested(&mut map, "user", self.linked.user(), keys, guard);
        json::push_nested(&mut map, "contact", self.linked.contact(), keys, guard);
        json::push_nested(
            &mut map,
            "organization",
            self.linked.organization(),
            keys,
            guard,
        );
        json::push_nested(&mut map, "subAccount", self.linked.sub_account(), keys, guard);
        map.insert(
            "subAccounts".to_owned(),
            json::collection(&self.sub_accounts, keys, guard),
        );
        map
    }
}

/// A named credential scope nested under an account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubAccount {
    id: i64,
    name: String,
    username: Option<String>,
    notes: Option<String>,
    stamp: AuditStamp,
}

impl SubAccount {
    /// A blank sub-account: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a sub-account from its transfer object, re-checking the
    /// same bounds the setters enforce.
    pub fn from_dto(dto: &SubAccountDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        validate::max_len_opt("notes", dto.notes.as_deref(), validate::DESCRIPTION_MAX)?;
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            username: dto.username.clone(),
            notes: dto.notes.clone(),
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
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
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

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
        self.stamp.touch();
    }

    pub fn set_notes(&mut self, notes: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("notes", notes.as_deref(), validate::DESCRIPTION_MAX)?;
        self.notes = notes;
        self.stamp.touch();
        Ok(())
    }

    fn to_dto(&self) -> SubAccountDto {
        SubAccountDto {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            notes: self.notes.clone(),
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        }
    }
}

impl Cast for SubAccount {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<SubAccountDto>() {
            convert::entry(Ok(self.to_dto()))
        } else {
            None
        }
    }
}

impl ToJson for SubAccount {
    fn json_key(&self) -> (&'static str, i64) {
        ("SubAccount", self.id)
    }

    fn project(&self, keys: &JsonKeys, _guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        json::push_str(&mut map, "username", self.username.as_deref());
        json::push_str(&mut map, "notes", self.notes.as_deref());
        map
    }
}
