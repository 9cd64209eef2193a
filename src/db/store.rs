//! Read side of the event store.
//!
//! [`EventStore`] is the contract the aggregator depends on; [`SqliteStore`]
//! is the production implementation over the `checkins`, `tasks` and
//! `focus_sessions` tables. Every row is decoded into one typed record here,
//! so nothing above this module touches raw SQLite rows.

use crate::core::window::DateWindow;
use crate::errors::{AppError, AppResult};
use crate::models::focus_session::SessionCounts;
use crate::models::task::{CompletedTask, TaskCounts};
use crate::models::task_status::{TaskDateField, TaskStatus};
use crate::utils::date::{DATE_FMT, to_iso};
use crate::utils::time::TIMESTAMP_FMT;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Row, params};
use tracing::debug;

pub trait EventStore {
    /// All check-in dates of the user, newest first.
    fn list_checkin_dates(&self, user_id: i64) -> AppResult<Vec<NaiveDate>>;

    /// Check-in dates inside the window, oldest first.
    fn checkin_dates_between(&self, user_id: i64, window: &DateWindow) -> AppResult<Vec<NaiveDate>>;

    /// Sum of `duration_minutes` of sessions started inside the window (0 if none).
    fn sum_focus_minutes(&self, user_id: i64, window: &DateWindow) -> AppResult<i64>;

    /// Per-day focus minutes for the days of the window that have sessions.
    fn focus_minutes_by_day(
        &self,
        user_id: i64,
        window: &DateWindow,
    ) -> AppResult<Vec<(NaiveDate, i64)>>;

    fn count_focus_sessions(&self, user_id: i64, window: &DateWindow) -> AppResult<SessionCounts>;

    /// Tasks whose `date_field` falls inside the window, optionally only with `status`.
    fn count_tasks(
        &self,
        user_id: i64,
        window: &DateWindow,
        date_field: TaskDateField,
        status: Option<TaskStatus>,
    ) -> AppResult<i64>;

    /// Completed tasks whose `updated_at` falls inside the window, newest first.
    fn completed_tasks_between(
        &self,
        user_id: i64,
        window: &DateWindow,
    ) -> AppResult<Vec<CompletedTask>>;

    fn list_completed_tasks(&self, user_id: i64, date: NaiveDate) -> AppResult<Vec<CompletedTask>> {
        self.completed_tasks_between(user_id, &DateWindow::single(date))
    }

    fn recent_completed_tasks(&self, user_id: i64, limit: usize) -> AppResult<Vec<CompletedTask>>;

    /// `(completed, total)` of the tasks due on `date`.
    fn count_tasks_due_on(&self, user_id: i64, date: NaiveDate) -> AppResult<TaskCounts>;
}

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

/// Decode a "YYYY-MM-DD" column (plain dates or the output of SQLite `date()`).
pub(crate) fn date_col(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw.clone())))
}

pub(crate) fn opt_date_col(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FMT)
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidDate(s.to_string()))),
    }
}

/// Decode a "YYYY-MM-DD HH:MM:SS" column.
pub(crate) fn timestamp_col(row: &Row, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidTimestamp(raw.clone())))
}

fn map_completed_task(row: &Row) -> rusqlite::Result<CompletedTask> {
    Ok(CompletedTask {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        course: row.get(3)?,
        completed_at: timestamp_col(row, 4)?,
    })
}

impl EventStore for SqliteStore<'_> {
    fn list_checkin_dates(&self, user_id: i64) -> AppResult<Vec<NaiveDate>> {
        debug!(user_id, "listing check-in dates");
        let mut stmt = self.conn.prepare_cached(
            "SELECT date FROM checkins
             WHERE user_id = ?1
             ORDER BY date DESC",
        )?;

        let rows = stmt.query_map([user_id], |row| date_col(row, 0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn checkin_dates_between(&self, user_id: i64, window: &DateWindow) -> AppResult<Vec<NaiveDate>> {
        debug!(user_id, %window, "listing check-in dates in window");
        let mut stmt = self.conn.prepare_cached(
            "SELECT date FROM checkins
             WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map(
            params![user_id, to_iso(window.start()), to_iso(window.end())],
            |row| date_col(row, 0),
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn sum_focus_minutes(&self, user_id: i64, window: &DateWindow) -> AppResult<i64> {
        debug!(user_id, %window, "summing focus minutes");
        let mut stmt = self.conn.prepare_cached(
            "SELECT COALESCE(SUM(duration_minutes), 0) FROM focus_sessions
             WHERE user_id = ?1 AND date(start_time) BETWEEN ?2 AND ?3",
        )?;
        let total: i64 = stmt.query_row(
            params![user_id, to_iso(window.start()), to_iso(window.end())],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    fn focus_minutes_by_day(
        &self,
        user_id: i64,
        window: &DateWindow,
    ) -> AppResult<Vec<(NaiveDate, i64)>> {
        debug!(user_id, %window, "bucketing focus minutes by day");
        let mut stmt = self.conn.prepare_cached(
            "SELECT date(start_time) AS day, COALESCE(SUM(duration_minutes), 0)
             FROM focus_sessions
             WHERE user_id = ?1 AND date(start_time) BETWEEN ?2 AND ?3
             GROUP BY day
             ORDER BY day ASC",
        )?;

        let rows = stmt.query_map(
            params![user_id, to_iso(window.start()), to_iso(window.end())],
            |row| Ok((date_col(row, 0)?, row.get::<_, i64>(1)?)),
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn count_focus_sessions(&self, user_id: i64, window: &DateWindow) -> AppResult<SessionCounts> {
        debug!(user_id, %window, "counting focus sessions");
        let mut stmt = self.conn.prepare_cached(
            "SELECT COUNT(*),
                    COALESCE(SUM(CASE WHEN end_time IS NOT NULL THEN 1 ELSE 0 END), 0)
             FROM focus_sessions
             WHERE user_id = ?1 AND date(start_time) BETWEEN ?2 AND ?3",
        )?;
        let counts = stmt.query_row(
            params![user_id, to_iso(window.start()), to_iso(window.end())],
            |row| {
                Ok(SessionCounts {
                    total: row.get(0)?,
                    completed: row.get(1)?,
                })
            },
        )?;
        Ok(counts)
    }

    fn count_tasks(
        &self,
        user_id: i64,
        window: &DateWindow,
        date_field: TaskDateField,
        status: Option<TaskStatus>,
    ) -> AppResult<i64> {
        debug!(user_id, %window, field = date_field.column(), ?status, "counting tasks");
        let start = to_iso(window.start());
        let end = to_iso(window.end());

        // column name comes from a closed enum, never from input
        let base = format!(
            "SELECT COUNT(*) FROM tasks
             WHERE user_id = ?1 AND date({}) BETWEEN ?2 AND ?3",
            date_field.column()
        );

        let count: i64 = match status {
            Some(s) => {
                let sql = format!("{base} AND status = ?4");
                let mut stmt = self.conn.prepare_cached(&sql)?;
                stmt.query_row(params![user_id, start, end, s.to_db_str()], |row| row.get(0))?
            }
            None => {
                let mut stmt = self.conn.prepare_cached(&base)?;
                stmt.query_row(params![user_id, start, end], |row| row.get(0))?
            }
        };
        Ok(count)
    }

    fn completed_tasks_between(
        &self,
        user_id: i64,
        window: &DateWindow,
    ) -> AppResult<Vec<CompletedTask>> {
        debug!(user_id, %window, "listing completed tasks in window");
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, description, course, updated_at
             FROM tasks
             WHERE user_id = ?1 AND status = 'completed'
               AND date(updated_at) BETWEEN ?2 AND ?3
             ORDER BY updated_at DESC, id DESC",
        )?;

        let rows = stmt.query_map(
            params![user_id, to_iso(window.start()), to_iso(window.end())],
            map_completed_task,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn recent_completed_tasks(&self, user_id: i64, limit: usize) -> AppResult<Vec<CompletedTask>> {
        debug!(user_id, limit, "listing recent completed tasks");
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, description, course, updated_at
             FROM tasks
             WHERE user_id = ?1 AND status = 'completed'
             ORDER BY updated_at DESC, id DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user_id, limit as i64], map_completed_task)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn count_tasks_due_on(&self, user_id: i64, date: NaiveDate) -> AppResult<TaskCounts> {
        debug!(user_id, %date, "counting tasks due on date");
        let mut stmt = self.conn.prepare_cached(
            "SELECT COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0),
                    COUNT(*)
             FROM tasks
             WHERE user_id = ?1 AND date(due_date) = ?2",
        )?;
        let counts = stmt.query_row(params![user_id, to_iso(date)], |row| {
            Ok(TaskCounts {
                completed: row.get(0)?,
                total: row.get(1)?,
            })
        })?;
        Ok(counts)
    }
}
