//! Task records as delivered by the project tasks endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// Kanban column a task sits in.
///
/// Anything the board sends that we don't recognise lands in `Other`
/// and is counted as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
    Other,
}


impl TaskStatus {
    /// Parse a status string, tolerating case and dash/space variants.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "todo" | "to_do" => TaskStatus::Todo,
            "in_progress" | "inprogress" => TaskStatus::InProgress,
            "review" | "in_review" => TaskStatus::Review,
            "done" | "completed" => TaskStatus::Done,
            _ => TaskStatus::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
            TaskStatus::Other => "other",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}


impl TaskPriority {
    /// Parse a priority string. Unknown values default to `Medium`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            "urgent" => TaskPriority::Urgent,
            _ => TaskPriority::Medium,
        }
    }
}


impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}


/// A single task on the team board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}


impl TaskRecord {
    /// Check if the task has been completed.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Check if work on the task has started but not finished.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, TaskStatus::InProgress | TaskStatus::Review)
    }
}
