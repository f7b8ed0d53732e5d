//! Integration tests for the database layer.
//!
//! These tests verify the task store using an in-memory SQLite database.

use task_api::db::Database;
use task_api::error::{ErrorCode, TaskError};
use task_api::types::{Task, TaskFilter};

/// Helper to create a fresh in-memory database for testing.
fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

mod save_tests {
    use super::*;

    #[test]
    fn save_without_id_assigns_fresh_ids() {
        let db = setup_db();

        let first = db.save_task(&Task::new("First", None)).unwrap();
        let second = db.save_task(&Task::new("Second", None)).unwrap();

        assert!(first.id.is_some());
        assert!(second.id.is_some());
        assert_ne!(first.id, second.id);
        assert!(!first.completed);
        assert_eq!(db.count_tasks().unwrap(), 2);
    }

    #[test]
    fn save_with_existing_id_replaces_every_field() {
        let db = setup_db();
        let saved = db
            .save_task(&Task::new("Title", Some("Description".to_string())))
            .unwrap();

        let replaced = Task::new("New title", None)
            .with_id(saved.id.unwrap())
            .with_completed(true);
        let updated = db.save_task(&replaced).unwrap();

        assert_eq!(updated, replaced);
        assert_eq!(db.get_task(saved.id.unwrap()).unwrap(), Some(replaced));
        assert_eq!(db.count_tasks().unwrap(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let db = setup_db();
        let first = db.save_task(&Task::new("First", None)).unwrap();
        db.delete_task(first.id.unwrap()).unwrap();

        let second = db.save_task(&Task::new("Second", None)).unwrap();
        assert!(second.id.unwrap() > first.id.unwrap());
    }

    #[test]
    fn blank_title_is_rejected_by_the_store() {
        let db = setup_db();

        let err = TaskError::from(db.save_task(&Task::new("   ", None)).unwrap_err());
        assert_eq!(err.code(), ErrorCode::StoreUsage);
        assert_eq!(db.count_tasks().unwrap(), 0);
    }

    #[test]
    fn whitespace_only_title_is_rejected_by_the_store() {
        let db = setup_db();

        for title in ["\t\n", "\r\n", " \t \x0B\x0C "] {
            let err = TaskError::from(db.save_task(&Task::new(title, None)).unwrap_err());
            assert_eq!(err.code(), ErrorCode::StoreUsage, "title {title:?}");
        }
        assert_eq!(db.count_tasks().unwrap(), 0);
    }

    #[test]
    fn whitespace_only_title_is_rejected_on_overwrite() {
        let db = setup_db();
        let saved = db.save_task(&Task::new("Title", None)).unwrap();
        let id = saved.id.unwrap();

        let err = TaskError::from(
            db.save_task(&Task::new("\t", None).with_id(id))
                .unwrap_err(),
        );
        assert_eq!(err.code(), ErrorCode::StoreUsage);
        assert_eq!(db.get_task(id).unwrap(), Some(saved));
    }

    #[test]
    fn title_with_surrounding_whitespace_is_stored_as_given() {
        let db = setup_db();
        let saved = db.save_task(&Task::new("\tTitle\n", None)).unwrap();
        assert_eq!(saved.title, "\tTitle\n");
    }
}

mod query_tests {
    use super::*;

    #[test]
    fn get_missing_task_returns_none() {
        let db = setup_db();
        assert_eq!(db.get_task(42).unwrap(), None);
        assert!(!db.task_exists(42).unwrap());
    }

    #[test]
    fn list_returns_tasks_in_id_order() {
        let db = setup_db();
        for title in ["a", "b", "c"] {
            db.save_task(&Task::new(title, None)).unwrap();
        }

        let titles: Vec<String> = db
            .list_tasks(TaskFilter::All)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn active_and_completed_partition_all() {
        let db = setup_db();
        for (i, title) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            db.save_task(&Task::new(title, None).with_completed(i % 2 == 0))
                .unwrap();
        }

        let all = db.list_tasks(TaskFilter::All).unwrap();
        let active = db.list_tasks(TaskFilter::Active).unwrap();
        let completed = db.list_tasks(TaskFilter::Completed).unwrap();

        assert_eq!(all.len(), 5);
        assert_eq!(active.len() + completed.len(), all.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        assert!(active.iter().all(|t| !completed.contains(t)));
    }

    #[test]
    fn empty_store_lists_nothing() {
        let db = setup_db();
        assert!(db.list_tasks(TaskFilter::All).unwrap().is_empty());
        assert!(db.list_tasks(TaskFilter::Active).unwrap().is_empty());
        assert!(db.list_tasks(TaskFilter::Completed).unwrap().is_empty());
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_reports_whether_a_row_was_removed() {
        let db = setup_db();
        let saved = db.save_task(&Task::new("Title", None)).unwrap();
        let id = saved.id.unwrap();

        assert!(db.delete_task(id).unwrap());
        assert!(!db.delete_task(id).unwrap());
        assert_eq!(db.get_task(id).unwrap(), None);
    }
}

mod file_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tasks_survive_reopening_the_database() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.db");

        let id = {
            let db = Database::open(&path).unwrap();
            db.save_task(&Task::new("Persistent", None)).unwrap().id
        };

        let db = Database::open(&path).unwrap();
        let task = db.get_task(id.unwrap()).unwrap().unwrap();
        assert_eq!(task.title, "Persistent");
    }
}
