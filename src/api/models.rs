//! Wire payloads for the task endpoints and their structural validation.

use crate::error::{FieldViolation, NOT_BLANK, TaskError, TaskResult};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};

/// Body of `POST /task/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTaskPayload {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            description,
        }
    }

    pub fn validate(&self) -> TaskResult<()> {
        check(not_blank("CreateTaskPayload", "title", self.title.as_deref()))
    }
}

/// Full task representation, used for responses and as the body of
/// `PUT /task/update/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TaskPayload {
    pub fn validate(&self) -> TaskResult<()> {
        check(not_blank("TaskPayload", "title", self.title.as_deref()))
    }
}

fn check(violations: impl IntoIterator<Item = FieldViolation>) -> TaskResult<()> {
    let violations: Vec<FieldViolation> = violations.into_iter().collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(TaskError::Validation(violations))
    }
}

/// A value is blank when it is absent or contains only whitespace.
fn not_blank(object: &str, field: &str, value: Option<&str>) -> Option<FieldViolation> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(FieldViolation {
            object: object.to_string(),
            field: field.to_string(),
            rejected_value: value.map(str::to_string),
            constraint: NOT_BLANK.to_string(),
        }),
    }
}
