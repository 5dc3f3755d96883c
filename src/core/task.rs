use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A to-do item as stored in the "mind" collection.
///
/// The id is assigned by the store on creation and never changes.
/// `completed_date` is present exactly when `is_complete` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

/// Creation fields for a task, validated before any store call.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
}

impl NewTask {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: None,
            due_date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("task name must not be empty");
        }
        Ok(())
    }
}
