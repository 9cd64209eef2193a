//! Write-side and lookup queries used by the recording layer.

use crate::db::store::{opt_date_col, timestamp_col};
use crate::errors::{AppError, AppResult};
use crate::models::focus_session::NewFocusSession;
use crate::models::task::{NewTask, Task};
use crate::models::task_status::TaskStatus;
use crate::models::user::User;
use crate::utils::date::to_iso;
use crate::utils::time;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn insert_user(conn: &Connection, first_name: &str, last_name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (first_name, last_name, created_at) VALUES (?1, ?2, ?3)",
        params![first_name.trim(), last_name.trim(), time::to_db(time::now())],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, user_id: i64) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT id, first_name, last_name, created_at FROM users WHERE id = ?1",
            [user_id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}

/// Insert a check-in. Returns false when the user already checked in that day.
pub fn insert_checkin(conn: &Connection, user_id: i64, date: NaiveDate) -> AppResult<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO checkins (user_id, date, created_at) VALUES (?1, ?2, ?3)",
        params![user_id, to_iso(date), time::to_db(time::now())],
    )?;
    Ok(inserted == 1)
}

pub fn insert_task(conn: &Connection, user_id: i64, task: &NewTask) -> AppResult<i64> {
    let created = time::to_db(task.created_at);
    conn.execute(
        "INSERT INTO tasks (user_id, title, description, course, status, due_date, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            user_id,
            task.title,
            task.description,
            task.course,
            task.status.to_db_str(),
            task.due_date.map(to_iso),
            created,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_task(row: &Row) -> Result<Task> {
    let status_str: String = row.get(5)?;
    let status = TaskStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        course: row.get(4)?,
        status,
        due_date: opt_date_col(row, 6)?,
        created_at: timestamp_col(row, 7)?,
        updated_at: timestamp_col(row, 8)?,
    })
}

/// Load a task only if it belongs to `user_id`.
pub fn get_task(conn: &Connection, user_id: i64, task_id: i64) -> AppResult<Option<Task>> {
    let task = conn
        .query_row(
            "SELECT id, user_id, title, description, course, status, due_date, created_at, updated_at
             FROM tasks WHERE id = ?1 AND user_id = ?2",
            params![task_id, user_id],
            map_task,
        )
        .optional()?;
    Ok(task)
}

/// Change status and refresh `updated_at`, which doubles as the completion time.
pub fn update_task_status(
    conn: &Connection,
    user_id: i64,
    task_id: i64,
    status: TaskStatus,
    at: NaiveDateTime,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
        params![status.to_db_str(), time::to_db(at), task_id, user_id],
    )?;
    Ok(n)
}

pub fn insert_focus_session(
    conn: &Connection,
    user_id: i64,
    session: &NewFocusSession,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO focus_sessions (user_id, task_id, duration_minutes, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            session.task_id,
            session.duration_minutes,
            time::to_db(session.start_time),
            session.end_time.map(time::to_db),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rows of the internal log table, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
