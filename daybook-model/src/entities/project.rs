//! Projects: named groups of assignments with completion tracking.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::ProjectDto;
use crate::entities::{Assignment, NullCollectionPolicy, restored_stamp};
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    id: i64,
    name: String,
    description: Option<String>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    assignments: Option<Vec<Assignment>>,
    stamp: AuditStamp,
}

impl Project {
    /// This entity keeps a null assignment list distinct from an empty one.
    const ASSIGNMENTS_POLICY: NullCollectionPolicy = NullCollectionPolicy::Preserve;

    /// A blank project: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a project from its transfer object, re-checking the
    /// same bounds the setters enforce.
    pub fn from_dto(dto: &ProjectDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("name", &dto.name, validate::NAME_MAX)?;
        validate::max_len_opt(
            "description",
            dto.description.as_deref(),
            validate::DESCRIPTION_MAX,
        )?;
        let assignments = match &dto.assignments {
            None => None,
            Some(dtos) => Some(
                dtos.iter()
                    .map(Assignment::from_dto)
                    .collect::<ConvertResult<Vec<Assignment>>>()?,
            ),
        };
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            description: dto.description.clone(),
            completed: dto.completed,
            completed_at: dto.completed_at,
            assignments,
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
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn assignments(&self) -> Option<&[Assignment]> {
        self.assignments.as_deref()
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

    pub fn set_description(&mut self, description: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt(
            "description",
            description.as_deref(),
            validate::DESCRIPTION_MAX,
        )?;
        self.description = description;
        self.stamp.touch();
        Ok(())
    }

    /// Sets the completion flag. Transitioning from completed back to
    /// incomplete clears the completion date inside this same call — the
    /// two fields never disagree between setter invocations.
    pub fn set_completed(&mut self, completed: bool) {
        if self.completed && !completed {
            self.completed_at = None;
        }
        self.completed = completed;
        self.stamp.touch();
    }

    pub fn set_completed_at(&mut self, completed_at: Option<DateTime<Utc>>) {
        self.completed_at = completed_at;
        self.stamp.touch();
    }

    pub fn set_assignments(&mut self, assignments: Option<Vec<Assignment>>) {
        self.assignments = Self::ASSIGNMENTS_POLICY.apply(assignments);
        self.stamp.touch();
    }

    fn to_dto(&self) -> ConvertResult<ProjectDto> {
        Ok(ProjectDto {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            completed: self.completed,
            completed_at: self.completed_at,
            assignments: convert::cast_collection(&self.assignments)?,
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        })
    }
}

impl Cast for Project {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<ProjectDto>() {
            convert::entry(self.to_dto())
        } else {
            None
        }
    }
}

impl ToJson for Project {
    fn json_key(&self) -> (&'static str, i64) {
        ("Project", self.id)
    }

    fn project(&self, keys: &JsonKeys, guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        json::push_str(&mut map, "description", self.description.as_deref());
        map.insert("completed".to_owned(), Value::Bool(self.completed));
        json::push_time(&mut map, "completedAt", self.completed_at);
        map.insert(
            "assignments".to_owned(),
            json::collection(&self.assignments, keys, guard),
        );
        map
    }
}
