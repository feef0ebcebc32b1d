//! Postal addresses.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::AddressDto;
use crate::entities::restored_stamp;
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, RegionLookup, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    id: i64,
    street: Option<String>,
    city: Option<String>,
    region_code: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    stamp: AuditStamp,
}

impl Address {
    /// A blank address: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs an address from its transfer object, re-checking the
    /// same bounds the setters enforce.
    pub fn from_dto(dto: &AddressDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len_opt("street", dto.street.as_deref(), validate::NAME_MAX)?;
        validate::max_len_opt("city", dto.city.as_deref(), validate::NAME_MAX)?;
        validate::max_len_opt("country", dto.country.as_deref(), validate::NAME_MAX)?;
        Ok(Self {
            id: dto.id,
            street: dto.street.clone(),
            city: dto.city.clone(),
            region_code: dto.region_code.clone(),
            postal_code: dto.postal_code.clone(),
            country: dto.country.clone(),
            stamp: restored_stamp(dto.date_created, dto.date_modified),
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
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

    pub fn set_street(&mut self, street: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("street", street.as_deref(), validate::NAME_MAX)?;
        self.street = street;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_city(&mut self, city: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("city", city.as_deref(), validate::NAME_MAX)?;
        self.city = city;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_region_code(&mut self, region_code: Option<String>) {
        self.region_code = region_code;
        self.stamp.touch();
    }

    pub fn set_postal_code(&mut self, postal_code: Option<String>) {
        self.postal_code = postal_code;
        self.stamp.touch();
    }

    pub fn set_country(&mut self, country: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("country", country.as_deref(), validate::NAME_MAX)?;
        self.country = country;
        self.stamp.touch();
        Ok(())
    }

    /// Display form of the region, resolved through the consumer-supplied
    /// lookup. Unknown codes fall back to the raw code; an address without a
    /// region yields `None`. Display-only — conversion and validation never
    /// consult the lookup.
    #[must_use]
    pub fn region_display(&self, lookup: &dyn RegionLookup) -> Option<String> {
        let code = self.region_code.as_deref()?;
        match lookup.region(code) {
            Some(region) => Some(format!("{} ({})", region.name, region.abbreviation)),
            None => Some(code.to_owned()),
        }
    }

    fn to_dto(&self) -> AddressDto {
        AddressDto {
            id: self.id,
            street: self.street.clone(),
            city: self.city.clone(),
            region_code: self.region_code.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        }
    }
}

impl Cast for Address {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<AddressDto>() {
            convert::entry(Ok(self.to_dto()))
        } else {
            None
        }
    }
}

impl ToJson for Address {
    fn json_key(&self) -> (&'static str, i64) {
        ("Address", self.id)
    }

    fn project(&self, keys: &JsonKeys, _guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        json::push_str(&mut map, "street", self.street.as_deref());
        json::push_str(&mut map, "city", self.city.as_deref());
        json::push_str(&mut map, "regionCode", self.region_code.as_deref());
        json::push_str(&mut map, "postalCode", self.postal_code.as_deref());
        json::push_str(&mut map, "country", self.country.as_deref());
        map
    }
}
