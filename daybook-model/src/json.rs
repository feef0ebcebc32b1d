//! JSON projection for entities.
//!
//! Entities project to JSON through a manual `serde_json::Value` build
//! rather than a serde derive, for three reasons the derive cannot express
//! together:
//! - key naming is a pluggable mapping ([`JsonKeys`]), not a hardcoded
//!   rename attribute;
//! - null collections serialize as `[]` while null scalars serialize as
//!   explicit `null`, and omit-if-default fields disappear entirely;
//! - cyclic back-references (a nested entity pointing at its container) are
//!   broken by omitting the repeated edge instead of recursing forever.
//!
//! Transfer objects do not use this machinery — they are plain camelCase
//! serde records and serialize directly.

use chrono::{DateTime, Utc};
use daybook_types::AuditStamp;
use serde_json::{Map, Value};

/// Key mapping for the audit fields shared by every entity.
///
/// Consumers that expect different spellings (`createdDate` vs
/// `dateCreated`) pass their own mapping to [`ToJson::to_json_with`].
#[derive(Debug, Clone)]
pub struct JsonKeys {
    pub id: &'static str,
    pub created: &'static str,
    pub modified: &'static str,
}

impl Default for JsonKeys {
    fn default() -> Self {
        Self {
            id: "id",
            created: "dateCreated",
            modified: "dateModified",
        }
    }
}

/// Tracks the (type, id) pairs on the current projection path.
///
/// Re-entering a pair already on the path means a back-reference cycle; the
/// repeated edge is omitted from the output.
#[derive(Debug, Default)]
pub struct CycleGuard {
    path: Vec<(String, i64)>,
}

impl CycleGuard {
    /// Pushes an entity onto the path. Returns false (and pushes nothing)
    /// when the entity is already being projected higher up the path.
    pub fn enter(&mut self, type_name: &str, id: i64) -> bool {
        if self.path.iter().any(|(t, i)| t == type_name && *i == id) {
            tracing::debug!(type_name, id, "repeated edge omitted from JSON projection");
            return false;
        }
        self.path.push((type_name.to_owned(), id));
        true
    }

    /// Pops the most recently entered entity.
    pub fn leave(&mut self) {
        self.path.pop();
    }
}

/// Projection of an entity's public fields to JSON.
pub trait ToJson {
    /// Stable (type name, id) pair used for cycle detection.
    fn json_key(&self) -> (&'static str, i64);

    /// Projects the entity's fields into a JSON object map. Nested entities
    /// must go through [`push_nested`] / [`collection`] so cycles break.
    fn project(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Map<String, Value>;

    /// Builds the JSON value, or `None` when this entity is already on the
    /// current projection path.
    fn to_value(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Option<Value> {
        let (type_name, id) = self.json_key();
        if !guard.enter(type_name, id) {
            return None;
        }
        let map = self.project(keys, guard);
        guard.leave();
        Some(Value::Object(map))
    }

    /// Serializes with the default key mapping.
    fn to_json(&self) -> String {
        self.to_json_with(&JsonKeys::default())
    }

    /// Serializes with a caller-supplied key mapping.
    fn to_json_with(&self, keys: &JsonKeys) -> String {
        let mut guard = CycleGuard::default();
        match self.to_value(keys, &mut guard) {
            Some(value) => value.to_string(),
            None => Value::Null.to_string(),
        }
    }
}

/// Inserts the shared audit fields: id, creation time, modification time
/// (explicit `null` while unmodified).
pub fn push_audit(map: &mut Map<String, Value>, keys: &JsonKeys, id: i64, stamp: &AuditStamp) {
    map.insert(keys.id.to_owned(), Value::from(id));
    map.insert(
        keys.created.to_owned(),
        Value::String(stamp.created_at().to_rfc3339()),
    );
    map.insert(keys.modified.to_owned(), time_value(stamp.modified_at()));
}

/// Inserts a nullable string field; `None` becomes an explicit `null`.
pub fn push_str(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    let value = match value {
        Some(v) => Value::String(v.to_owned()),
        None => Value::Null,
    };
    map.insert(key.to_owned(), value);
}

/// Inserts a nullable timestamp field; `None` becomes an explicit `null`.
pub fn push_time(map: &mut Map<String, Value>, key: &str, value: Option<DateTime<Utc>>) {
    map.insert(key.to_owned(), time_value(value));
}

/// Inserts an integer field only when it differs from the 0 sentinel
/// (omit-if-default, used for derived foreign-key ids).
pub fn push_nonzero(map: &mut Map<String, Value>, key: &str, value: i64) {
    if value != 0 {
        map.insert(key.to_owned(), Value::from(value));
    }
}

/// Inserts a string field only when present (omit-if-default, used for
/// derived type discriminators).
pub fn push_if_present(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_owned(), Value::String(v.to_owned()));
    }
}

/// Inserts a nested entity: absent → explicit `null`; on the current
/// projection path (a cycle) → key omitted.
pub fn push_nested<T: ToJson>(
    map: &mut Map<String, Value>,
    key: &str,
    item: Option<&T>,
    keys: &JsonKeys,
    guard: &mut CycleGuard,
) {
    match item {
        None => {
            map.insert(key.to_owned(), Value::Null);
        }
        Some(entity) => {
            if let Some(value) = entity.to_value(keys, guard) {
                map.insert(key.to_owned(), value);
            }
        }
    }
}

/// Projects an entity collection. A null collection serializes as an empty
/// array; elements on the current projection path are skipped.
pub fn collection<T: ToJson>(
    items: &Option<Vec<T>>,
    keys: &JsonKeys,
    guard: &mut CycleGuard,
) -> Value {
    match items {
        None => Value::Array(Vec::new()),
        Some(items) => Value::Array(
            items
                .iter()
                .filter_map(|item| item.to_value(keys, guard))
                .collect(),
        ),
    }
}

fn time_value(value: Option<DateTime<Utc>>) -> Value {
    match value {
        Some(t) => Value::String(t.to_rfc3339()),
        None => Value::Null,
    }
}
