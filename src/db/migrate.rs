use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

/// A schema step, recorded in the `log` table once applied.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_activity_tables",
        description: "Created users, checkins, tasks and focus_sessions tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL DEFAULT '',
            last_name   TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS checkins (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            date        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            UNIQUE(user_id, date)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title        TEXT NOT NULL,
            description  TEXT,
            course       TEXT,
            status       TEXT NOT NULL DEFAULT 'pending'
                         CHECK(status IN ('pending','in_progress','completed')),
            due_date     TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS focus_sessions (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id           INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            task_id           INTEGER REFERENCES tasks(id) ON DELETE SET NULL,
            duration_minutes  INTEGER NOT NULL DEFAULT 0 CHECK(duration_minutes >= 0),
            start_time        TEXT NOT NULL,
            end_time          TEXT
        );
        "#,
    },
    Migration {
        version: "20240101_0002_add_activity_indexes",
        description: "Added per-user date indexes for ranged aggregation",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_checkins_user_date ON checkins(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_focus_user_start ON focus_sessions(user_id, start_time);
        CREATE INDEX IF NOT EXISTS idx_tasks_user_status_updated ON tasks(user_id, status, updated_at);
        CREATE INDEX IF NOT EXISTS idx_tasks_user_created ON tasks(user_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_tasks_user_due ON tasks(user_id, due_date);
        "#,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now', 'localtime'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    info!(version = m.version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            debug!(version = m.version, "migration already applied");
            continue;
        }
        apply(conn, m)?;
    }

    Ok(())
}

/// Number of migrations recorded as applied.
pub fn applied_count(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}
