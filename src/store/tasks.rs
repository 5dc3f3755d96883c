use chrono::Utc;
use serde_json::json;

use super::{DocStore, Error};
use crate::core::task::{NewTask, Task};

const MIND_COLLECTION: &str = "mind";

/// CRUD adapter for the task collection.
///
/// Incomplete and completed tasks are disjoint partitions filtered by
/// `is_complete`; callers reload both after any mutation.
#[derive(Clone)]
pub struct TaskStore {
    store: DocStore,
}

impl TaskStore {
    pub fn new(store: DocStore) -> Self {
        Self { store }
    }

    /// Create an incomplete task, returning the store-assigned id.
    pub async fn add(&self, task: &NewTask) -> Result<String, Error> {
        let fields = json!({
            "name": task.name,
            "description": task.description,
            "due_date": task.due_date,
            "is_complete": false,
        });
        let id = self.store.create(MIND_COLLECTION, &fields).await?;
        log::info!("Added task {} due {}", id, task.due_date);
        Ok(id)
    }

    /// All incomplete tasks, ordered by due date ascending.
    pub async fn incomplete(&self) -> Result<Vec<Task>, Error> {
        self.list(false).await
    }

    /// All completed tasks, ordered by due date ascending.
    pub async fn completed(&self) -> Result<Vec<Task>, Error> {
        self.list(true).await
    }

    async fn list(&self, is_complete: bool) -> Result<Vec<Task>, Error> {
        let mut tasks: Vec<Task> = self
            .store
            .query(
                MIND_COLLECTION,
                Some(("is_complete", is_complete)),
                Some("due_date"),
            )
            .await?;
        // Stable re-sort so the ordering never depends on the backend.
        tasks.sort_by_key(|t| t.due_date);
        log::debug!(
            "Loaded {} {} tasks",
            tasks.len(),
            if is_complete { "completed" } else { "incomplete" }
        );
        Ok(tasks)
    }

    /// Mark a task complete, stamping the completion time.
    pub async fn complete(&self, id: &str) -> Result<(), Error> {
        let fields = json!({
            "is_complete": true,
            "completed_date": Utc::now(),
        });
        self.store.update(MIND_COLLECTION, id, &fields).await?;
        log::info!("Completed task {}", id);
        Ok(())
    }

    /// Delete a task, incomplete or completed.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.store.delete(MIND_COLLECTION, id).await?;
        log::info!("Deleted task {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn task_record_decodes_with_optional_fields_absent() {
        let task: Task = serde_json::from_str(
            r#"{"id": "t1", "name": "Pay rent", "due_date": "2026-03-01"}"#,
        )
        .unwrap();
        assert_eq!(task.name, "Pay rent");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!(!task.is_complete);
        assert!(task.completed_date.is_none());
        assert!(task.description.is_none());
    }

    #[test]
    fn completed_record_carries_completion_timestamp() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t2",
                "name": "File taxes",
                "description": "before the deadline",
                "due_date": "2026-04-15",
                "is_complete": true,
                "completed_date": "2026-04-10T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert!(task.is_complete);
        assert!(task.completed_date.is_some());
    }

    #[test]
    fn create_payload_shape() {
        let task = NewTask::new("Pay rent", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let fields = json!({
            "name": task.name,
            "description": task.description,
            "due_date": task.due_date,
            "is_complete": false,
        });
        assert_eq!(fields["due_date"], "2026-03-01");
        assert_eq!(fields["is_complete"], false);
        assert!(fields["description"].is_null());
    }
}
