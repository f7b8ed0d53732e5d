//! Typed failures raised by the task service and the HTTP boundary.

use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request errors
    ValidationFailed,
    MalformedBody,
    UnsupportedMediaType,
    InvalidRequest,
    IdentityMissing,
    IdentityConflict,

    // Not found errors
    TaskNotFound,

    // Store errors
    StoreUsage,
    DatabaseError,
}

pub const NO_ID_MESSAGE: &str = "Task to update has no id";
pub const NO_TASK_MESSAGE: &str = "There is no task with id = ";
pub const NULL_ID_MESSAGE: &str = "Can't find task with id == null";
pub const NOT_BLANK: &str = "must not be blank";

/// A single rejected payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the payload object the field belongs to.
    pub object: String,
    pub field: String,
    /// The offending value, `None` when the field was absent or null.
    pub rejected_value: Option<String>,
    pub constraint: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field error in object '{}' on field '{}': rejected value [{}]; {}",
            self.object,
            self.field,
            self.rejected_value.as_deref().unwrap_or("null"),
            self.constraint
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("There is no task with id = {0}")]
    NotFound(TaskId),

    #[error("Task to update has no id")]
    IdentityMissing,

    #[error(
        "The id of resource object can't be changed. Path variable id = {path_id} while resource object id = {body_id}"
    )]
    IdentityConflict { path_id: TaskId, body_id: TaskId },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Validation failed with {} error(s): {}", .0.len(), join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    StoreUsage(String),

    #[error(transparent)]
    Database(anyhow::Error),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskError {
    pub fn null_id() -> Self {
        Self::InvalidRequest(NULL_ID_MESSAGE.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TaskError::NotFound(_) => ErrorCode::TaskNotFound,
            TaskError::IdentityMissing => ErrorCode::IdentityMissing,
            TaskError::IdentityConflict { .. } => ErrorCode::IdentityConflict,
            TaskError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            TaskError::Validation(_) => ErrorCode::ValidationFailed,
            TaskError::MalformedBody(_) => ErrorCode::MalformedBody,
            TaskError::UnsupportedMediaType(_) => ErrorCode::UnsupportedMediaType,
            TaskError::StoreUsage(_) => ErrorCode::StoreUsage,
            TaskError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    /// Field-level detail, present only for validation failures.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            TaskError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

// Store code reports failures through anyhow; recover the SQLite error to tell
// misuse of the store apart from genuine database failures.
impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<rusqlite::Error>() {
            Ok(sql_err) if is_store_usage(&sql_err) => TaskError::StoreUsage(sql_err.to_string()),
            Ok(sql_err) => TaskError::Database(sql_err.into()),
            Err(err) => TaskError::Database(err),
        }
    }
}

fn is_store_usage(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == rusqlite::ErrorCode::ConstraintViolation
        }
        rusqlite::Error::InvalidParameterName(_)
        | rusqlite::Error::InvalidParameterCount(_, _)
        | rusqlite::Error::ToSqlConversionFailure(_)
        | rusqlite::Error::IntegralValueOutOfRange(_, _) => true,
        _ => false,
    }
}

/// Result type for service operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        assert_eq!(
            TaskError::NotFound(7).to_string(),
            "There is no task with id = 7"
        );
    }

    #[test]
    fn identity_conflict_message_names_both_ids() {
        let err = TaskError::IdentityConflict {
            path_id: 1,
            body_id: 51,
        };
        let message = err.to_string();
        assert!(message.contains("Path variable id = 1"));
        assert!(message.contains("resource object id = 51"));
    }

    #[test]
    fn validation_message_names_field_value_and_constraint() {
        let err = TaskError::Validation(vec![FieldViolation {
            object: "CreateTaskPayload".to_string(),
            field: "title".to_string(),
            rejected_value: None,
            constraint: NOT_BLANK.to_string(),
        }]);
        let message = err.to_string();
        assert!(message.contains("on field 'title'"));
        assert!(message.contains("rejected value [null]"));
        assert!(message.contains("must not be blank"));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn constraint_violation_is_store_usage() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT NOT NULL);").unwrap();
        let sql_err = conn
            .execute("INSERT INTO t (v) VALUES (NULL)", [])
            .unwrap_err();

        let err = TaskError::from(anyhow::Error::from(sql_err));
        assert_eq!(err.code(), ErrorCode::StoreUsage);
    }

    #[test]
    fn other_errors_are_database_errors() {
        let err = TaskError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.to_string(), "disk on fire");
    }
}
