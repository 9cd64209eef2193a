use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Lenient parser for CLI input ("in-progress", "Done", ...).
    pub fn parse(input: &str) -> AppResult<Self> {
        let norm = input.trim().to_lowercase().replace('-', "_");
        match norm.as_str() {
            "done" => Ok(TaskStatus::Completed),
            "todo" => Ok(TaskStatus::Pending),
            other => Self::from_db_str(other).ok_or_else(|| AppError::InvalidStatus(input.into())),
        }
    }
}

/// Which task date bounds a completion-rate population.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskDateField {
    #[default]
    CreatedAt,
    DueDate,
}

impl TaskDateField {
    /// Column name in the `tasks` table. Static, never user supplied.
    pub fn column(&self) -> &'static str {
        match self {
            TaskDateField::CreatedAt => "created_at",
            TaskDateField::DueDate => "due_date",
        }
    }
}
