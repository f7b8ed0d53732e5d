//! Task service: existence and identity checks in front of the task store.

use crate::db::Database;
use crate::error::{TaskError, TaskResult};
use crate::types::{Task, TaskFilter, TaskId};
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates task operations against the database.
///
/// Every call goes straight through to the store; the service keeps no state of
/// its own beyond the database handle. Read-modify-write operations are not
/// serialized, so concurrent toggles on one task resolve as last write wins.
#[derive(Clone)]
pub struct TaskService {
    db: Arc<Database>,
}

impl TaskService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Persist a new task and return it with its assigned id.
    pub fn create(&self, task: Task) -> TaskResult<Task> {
        let saved = self.db.save_task(&task)?;
        info!(task_id = ?saved.id, "Task created");
        Ok(saved)
    }

    /// Replace every field of an existing task.
    ///
    /// Checks run in a fixed order: both ids present, ids equal, target exists.
    pub fn update(&self, task: Task, target_id: Option<TaskId>) -> TaskResult<Task> {
        let (Some(target_id), Some(task_id)) = (target_id, task.id) else {
            return Err(TaskError::IdentityMissing);
        };
        if target_id != task_id {
            return Err(TaskError::IdentityConflict {
                path_id: target_id,
                body_id: task_id,
            });
        }
        if !self.db.task_exists(target_id)? {
            return Err(TaskError::NotFound(target_id));
        }

        let saved = self.db.save_task(&task)?;
        info!(task_id = target_id, completed = saved.completed, "Task updated");
        Ok(saved)
    }

    pub fn mark_completed(&self, id: Option<TaskId>) -> TaskResult<Task> {
        self.set_completed(id, true)
    }

    pub fn mark_active(&self, id: Option<TaskId>) -> TaskResult<Task> {
        self.set_completed(id, false)
    }

    fn set_completed(&self, id: Option<TaskId>, completed: bool) -> TaskResult<Task> {
        let id = id.ok_or_else(TaskError::null_id)?;
        let mut task = self.find_by_id(id)?;
        task.completed = completed;
        let saved = self.db.save_task(&task)?;
        info!(task_id = id, completed, "Task completion changed");
        Ok(saved)
    }

    pub fn find_by_id(&self, id: TaskId) -> TaskResult<Task> {
        debug!(task_id = id, "Looking up task");
        self.db.get_task(id)?.ok_or(TaskError::NotFound(id))
    }

    pub fn find_all(&self) -> TaskResult<Vec<Task>> {
        self.find(TaskFilter::All)
    }

    pub fn find_all_active(&self) -> TaskResult<Vec<Task>> {
        self.find(TaskFilter::Active)
    }

    pub fn find_all_completed(&self) -> TaskResult<Vec<Task>> {
        self.find(TaskFilter::Completed)
    }

    fn find(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.db.list_tasks(filter)?;
        debug!(?filter, count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Number of stored tasks.
    pub fn count(&self) -> TaskResult<i64> {
        Ok(self.db.count_tasks()?)
    }

    /// Remove a task, failing if it does not exist.
    pub fn delete_by_id(&self, id: TaskId) -> TaskResult<()> {
        if !self.db.task_exists(id)? {
            return Err(TaskError::NotFound(id));
        }
        self.db.delete_task(id)?;
        info!(task_id = id, "Task deleted");
        Ok(())
    }
}
