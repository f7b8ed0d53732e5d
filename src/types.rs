//! Core types for the task service.

use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
pub type TaskId = i64;

/// A task record.
///
/// `id` is `None` until the task has been persisted for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet persisted, active task.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description,
            completed: false,
        }
    }

    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Which slice of the task table a listing query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    /// Tasks with `completed = false`.
    Active,
    /// Tasks with `completed = true`.
    Completed,
}

impl TaskFilter {
    /// The `completed` value this filter selects, if it selects one.
    pub fn completed(self) -> Option<bool> {
        match self {
            TaskFilter::All => None,
            TaskFilter::Active => Some(false),
            TaskFilter::Completed => Some(true),
        }
    }
}
