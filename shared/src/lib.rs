use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task record. `id` is `None` until the store persists the record and
/// assigns one; after that it never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            id: None,
            title,
            description,
            completed: false,
        }
    }
}

/// Request body for creating or updating a task. The title is optional here so
/// that a missing title surfaces as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Wire shape of every error the API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
            details: Vec::new(),
        }
    }
}
