use crate::db::migrate::{applied_count, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

/// Bring the schema up to date. Safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    let applied = applied_count(conn)?;
    debug!(applied, "schema ready");
    Ok(())
}
