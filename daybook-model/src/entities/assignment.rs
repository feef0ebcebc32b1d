//! Assignments: individual pieces of work within a project.

use crate::convert::{self, BuiltTarget, Cast};
use crate::dto::AssignmentDto;
use crate::entities::restored_stamp;
use crate::error::ConvertResult;
use crate::json::{self, CycleGuard, JsonKeys, ToJson};
use chrono::{DateTime, Utc};
use daybook_types::{AuditStamp, ValidationResult, validate};
use serde_json::{Map, Value};
use std::any::TypeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    id: i64,
    title: String,
    details: Option<String>,
    project_id: i64,
    due_at: Option<DateTime<Utc>>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    stamp: AuditStamp,
}

impl Assignment {
    /// A blank assignment: all defaults, created now, never modified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs an assignment from its transfer object, re-checking the
    /// same bounds the setters enforce.
    pub fn from_dto(dto: &AssignmentDto) -> ConvertResult<Self> {
        validate::non_negative("id", dto.id)?;
        validate::max_len("title", &dto.title, validate::NAME_MAX)?;
        validate::max_len_opt("details", dto.details.as_deref(), validate::DESCRIPTION_MAX)?;
        validate::non_negative("projectId", dto.project_id)?;
        Ok(Self {
            id: dto.id,
            title: dto.title.clone(),
            details: dto.details.clone(),
            project_id: dto.project_id,
            due_at: dto.due_at,
            completed: dto.completed,
            completed_at: dto.completed_at,
            stamp: restored_stamp(dto.date_created, dto.date_modified),
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    #[must_use]
    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
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

    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult<()> {
        let title = title.into();
        validate::required("title", &title)?;
        validate::max_len("title", &title, validate::NAME_MAX)?;
        self.title = title;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_details(&mut self, details: Option<String>) -> ValidationResult<()> {
        validate::max_len_opt("details", details.as_deref(), validate::DESCRIPTION_MAX)?;
        self.details = details;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_project_id(&mut self, project_id: i64) -> ValidationResult<()> {
        validate::non_negative("projectId", project_id)?;
        self.project_id = project_id;
        self.stamp.touch();
        Ok(())
    }

    pub fn set_due_at(&mut self, due_at: Option<DateTime<Utc>>) {
        self.due_at = due_at;
        self.stamp.touch();
    }

    /// Sets the completion flag. Transitioning from completed back to
    /// incomplete clears the completion date inside this same call.
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

    fn to_dto(&self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            title: self.title.clone(),
            details: self.details.clone(),
            project_id: self.project_id,
            due_at: self.due_at,
            completed: self.completed,
            completed_at: self.completed_at,
            date_created: Some(self.stamp.created_at()),
            date_modified: self.stamp.modified_at(),
        }
    }
}

impl Cast for Assignment {
    fn build(&self, target: TypeId) -> Option<BuiltTarget> {
        if target == TypeId::of::<AssignmentDto>() {
            convert::entry(Ok(self.to_dto()))
        } else {
            None
        }
    }
}

impl ToJson for Assignment {
    fn json_key(&self) -> (&'static str, i64) {
        ("Assignment", self.id)
    }

    fn project(&self, keys: &JsonKeys, _guard: &mut CycleGuard) -> Map<String, Value> {
        let mut map = Map::new();
        json::push_audit(&mut map, keys, self.id, &self.stamp);
        map.insert("title".to_owned(), Value::String(self.title.clone()));
        json::push_str(&mut map, "details", self.details.as_deref());
        json::push_nonzero(&mut map, "projectId", self.project_id);
        json::push_time(&mut map, "dueAt", self.due_at);
        map.insert("completed".to_owned(), Value::Bool(self.completed));
        json::push_time(&mut map, "completedAt", self.completed_at);
        map
    }
}
