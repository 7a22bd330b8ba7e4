use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::brain::{PriorityLevel, TaskCategory};

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Represents a request to create a task, as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// The title of the task, 1 to 200 characters. Must not be blank.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Optional free-text details, at most 5000 characters.
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// Explicit priority; overrides the inferred one when present.
    #[serde(default)]
    pub priority: Option<PriorityLevel>,
    /// Explicit category; overrides the inferred one when present.
    #[serde(default)]
    pub category: Option<TaskCategory>,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            priority: None,
            category: None,
        }
    }

    /// Whether the caller supplied both classifications, making analysis unnecessary.
    pub fn is_fully_classified(&self) -> bool {
        self.priority.is_some() && self.category.is_some()
    }
}

/// Represents a task ready to hand to the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedTask {
    /// The unique identifier for the task (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: PriorityLevel,
    pub category: TaskCategory,
    /// Analyzer confidence; absent when the caller supplied both classifications.
    pub confidence: Option<f64>,
    /// Explanation of how priority and category were chosen.
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// When the task was classified.
    pub created_at: DateTime<Utc>,
}
