//! Conversions between wire payloads and the task entity.
//!
//! Every field is copied explicitly. Payloads are validated before they reach
//! the mapper, so a missing title maps to an empty string rather than an error.

use super::models::{CreateTaskPayload, TaskPayload};
use crate::types::Task;

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskMapper;

impl TaskMapper {
    pub fn new() -> Self {
        Self
    }

    /// New, unpersisted task from a create request.
    pub fn create_to_entity(&self, payload: CreateTaskPayload) -> Task {
        Task {
            id: None,
            title: payload.title.unwrap_or_default(),
            description: payload.description,
            completed: false,
        }
    }

    pub fn to_entity(&self, payload: TaskPayload) -> Task {
        Task {
            id: payload.id,
            title: payload.title.unwrap_or_default(),
            description: payload.description,
            completed: payload.completed,
        }
    }

    pub fn to_payload(&self, task: Task) -> TaskPayload {
        TaskPayload {
            id: task.id,
            title: Some(task.title),
            description: task.description,
            completed: task.completed,
        }
    }

    pub fn to_payloads(&self, tasks: Vec<Task>) -> Vec<TaskPayload> {
        tasks.into_iter().map(|task| self.to_payload(task)).collect()
    }

    pub fn to_entities(&self, payloads: Vec<TaskPayload>) -> Vec<Task> {
        payloads
            .into_iter()
            .map(|payload| self.to_entity(payload))
            .collect()
    }
}
