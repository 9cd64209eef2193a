// src/export/model.rs

use crate::core::trend::TrendEntry;
use serde::Serialize;

/// Flat, one-line-per-day shape of a trend entry (CSV has no nesting).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TrendExportRow {
    pub date: String,
    pub weekday: String,
    pub checked_in: bool,
    pub focus_minutes: i64,
    pub focus_time: String,
    pub task_count: usize,
    /// Titles of the tasks completed that day, "; "-separated.
    pub tasks: String,
}

impl From<&TrendEntry> for TrendExportRow {
    fn from(e: &TrendEntry) -> Self {
        Self {
            date: e.date.clone(),
            weekday: e.weekday.clone(),
            checked_in: e.checked_in,
            focus_minutes: e.focus_minutes,
            focus_time: e.focus_time.to_string(),
            task_count: e.task_count,
            tasks: e
                .tasks
                .iter()
                .map(|t| t.title.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

pub(crate) fn entries_to_rows(entries: &[TrendEntry]) -> Vec<TrendExportRow> {
    entries.iter().map(TrendExportRow::from).collect()
}
