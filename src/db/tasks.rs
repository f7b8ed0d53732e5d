//! Task table access.

use super::Database;
use crate::types::{Task, TaskFilter, TaskId};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_TASK: &str = "SELECT id, title, description, completed FROM tasks";

pub fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        description: row.get("description")?,
        completed: row.get("completed")?,
    })
}

/// Internal helper to get a task using an existing connection.
fn get_task_internal(conn: &Connection, id: TaskId) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            &format!("{SELECT_TASK} WHERE id = ?1"),
            params![id],
            parse_task_row,
        )
        .optional()?;
    Ok(task)
}

impl Database {
    /// Persist a task.
    ///
    /// A task without an id is inserted and receives a fresh id. A task with an
    /// id overwrites every column of the row with that id, inserting it if it
    /// does not exist yet.
    pub fn save_task(&self, task: &Task) -> Result<Task> {
        self.with_conn(|conn| {
            let id = match task.id {
                None => {
                    conn.execute(
                        "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, ?3)",
                        params![task.title, task.description, task.completed],
                    )?;
                    conn.last_insert_rowid()
                }
                Some(id) => {
                    conn.execute(
                        "INSERT INTO tasks (id, title, description, completed)
                         VALUES (?1, ?2, ?3, ?4)
                         ON CONFLICT(id) DO UPDATE SET
                             title = excluded.title,
                             description = excluded.description,
                             completed = excluded.completed",
                        params![id, task.title, task.description, task.completed],
                    )?;
                    id
                }
            };

            get_task_internal(conn, id)?
                .ok_or_else(|| anyhow::anyhow!("task {} vanished after save", id))
        })
    }

    /// Get a task by id.
    pub fn get_task(&self, id: TaskId) -> Result<Option<Task>> {
        self.with_conn(|conn| get_task_internal(conn, id))
    }

    /// Check whether a task with the given id exists.
    pub fn task_exists(&self, id: TaskId) -> Result<bool> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?1)",
                params![id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    /// List tasks in id order, optionally restricted by completion state.
    pub fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let tasks = match filter.completed() {
                None => {
                    let mut stmt = conn.prepare(&format!("{SELECT_TASK} ORDER BY id"))?;
                    stmt.query_map([], parse_task_row)?
                        .collect::<rusqlite::Result<Vec<_>>>()?
                }
                Some(completed) => {
                    let mut stmt = conn
                        .prepare(&format!("{SELECT_TASK} WHERE completed = ?1 ORDER BY id"))?;
                    stmt.query_map(params![completed], parse_task_row)?
                        .collect::<rusqlite::Result<Vec<_>>>()?
                }
            };
            Ok(tasks)
        })
    }

    /// Delete a task. Returns whether a row was removed.
    pub fn delete_task(&self, id: TaskId) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
            Ok(removed > 0)
        })
    }

    /// Count tasks.
    pub fn count_tasks(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
