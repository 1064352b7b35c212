//! Task payloads exchanged by `invoke`.
//!
//! The registry never inspects these; they travel between orchestrators and
//! workers only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One unit of task content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
    /// Structured JSON data.
    Data {
        /// The data.
        data: Value,
    },
}

impl Part {
    /// Creates a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns the text when this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Data { .. } => None,
        }
    }
}

/// Input delegated to a worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Caller-chosen task identifier; generated when absent.
    #[serde(default = "generate_task_id")]
    pub task_id: String,
    /// Task content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl TaskInput {
    /// Creates a task carrying a single text part under a fresh id.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            task_id: generate_task_id(),
            parts: vec![Part::text(text)],
        }
    }

    /// Joins every text part with newlines.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn generate_task_id() -> String {
    Uuid::new_v4().to_string()
}

/// Terminal task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// The task produced its artifacts.
    Completed,
    /// The task could not be carried out.
    Failed,
}

/// Task status with the time it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Terminal state.
    pub state: TaskState,
    /// When the state was reached.
    pub timestamp: DateTime<Utc>,
    /// Optional explanation, typically present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result returned by `invoke`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Identifier of the task this result answers.
    pub task_id: String,
    /// Final status.
    pub status: TaskStatus,
    /// Produced content.
    #[serde(default)]
    pub artifacts: Vec<Part>,
}

impl TaskResult {
    /// Creates a completed result.
    #[must_use]
    pub fn completed(task_id: impl Into<String>, artifacts: Vec<Part>, at: DateTime<Utc>) -> Self {
        Self {
            task_id: task_id.into(),
            status: TaskStatus {
                state: TaskState::Completed,
                timestamp: at,
                message: None,
            },
            artifacts,
        }
    }

    /// Creates a failed result with an explanation.
    #[must_use]
    pub fn failed(task_id: impl Into<String>, message: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            task_id: task_id.into(),
            status: TaskStatus {
                state: TaskState::Failed,
                timestamp: at,
                message: Some(message.into()),
            },
            artifacts: Vec::new(),
        }
    }

    /// Returns whether the task completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.state == TaskState::Completed
    }
}
