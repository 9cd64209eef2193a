use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};
use tracing::trace;

/// Append a journal line (`operation`, `target`, `message`) to the `log` table,
/// stamped with the local RFC 3339 time.
pub fn fflog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached("INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)")?
        .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    trace!(operation, target, "journaled");
    Ok(())
}
