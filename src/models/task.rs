//! Task rows and the task-derived values the aggregator hands out.

use super::task_status::TaskStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub course: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>, // ⇔ tasks.due_date (TEXT "YYYY-MM-DD", nullable)
    pub created_at: NaiveDateTime,   // ⇔ tasks.created_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub updated_at: NaiveDateTime,   // refreshed on every status change
}

/// Input for the recording layer.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub course: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// A task with `status = completed`; `completed_at` is its `updated_at`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompletedTask {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub course: Option<String>,
    pub completed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TaskCounts {
    pub completed: i64,
    pub total: i64,
}

impl TaskCounts {
    /// `completed * 100 / total`, truncated. Zero when there are no tasks.
    pub fn completion_rate(&self) -> u32 {
        if self.total <= 0 {
            return 0;
        }
        (self.completed.max(0) * 100 / self.total) as u32
    }
}
