// src/export/logic.rs

use crate::core::aggregator::ActivityAggregator;
use crate::core::window::DateWindow;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// Export of the daily trend of a user.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one record per day of `window` to `file` (absolute path).
    /// Days without activity are exported too, so the file always has
    /// `window.num_days()` records.
    pub fn export<S: EventStore>(
        agg: &ActivityAggregator<S>,
        user_id: i64,
        window: DateWindow,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let trend = agg.trend_for_window(user_id, window)?;
        let entries = trend.entries();
        debug!(user_id, %window, format = format.as_str(), "exporting trend");

        let active = entries
            .iter()
            .any(|e| e.checked_in || e.focus_minutes > 0 || e.task_count > 0);
        if !active {
            warning(format!("No activity found in {window}, exporting empty days."));
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(entries.len())
    }
}
