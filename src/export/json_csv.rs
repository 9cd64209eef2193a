// src/export/json_csv.rs

use crate::core::trend::TrendEntry;
use crate::errors::{AppError, AppResult};
use crate::export::model::entries_to_rows;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, tasks nested under each day.
pub(crate) fn export_json(entries: &[TrendEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, entries.len());
    Ok(())
}

/// Export CSV, one row per day (header from serde).
pub(crate) fn export_csv(entries: &[TrendEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in entries_to_rows(entries) {
        wtr.serialize(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, entries.len());
    Ok(())
}
