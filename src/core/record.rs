use crate::db::log::fflog;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::focus_session::NewFocusSession;
use crate::models::task::NewTask;
use crate::models::task_status::TaskStatus;
use crate::utils::date::to_iso;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use tracing::info;

/// Write side: users, check-ins, tasks and focus sessions.
/// Every successful write is journaled in the `log` table.
pub struct RecordLogic;

impl RecordLogic {
    pub fn add_user(conn: &Connection, first_name: &str, last_name: &str) -> AppResult<i64> {
        let id = queries::insert_user(conn, first_name, last_name)?;
        fflog(
            conn,
            "user_add",
            &format!("user={id}"),
            &format!("{} {}", first_name.trim(), last_name.trim()),
        )?;
        info!(user_id = id, "user created");
        Ok(id)
    }

    /// Returns false when `date` already has a check-in.
    pub fn check_in(conn: &Connection, user_id: i64, date: NaiveDate) -> AppResult<bool> {
        Self::require_user(conn, user_id)?;

        let inserted = queries::insert_checkin(conn, user_id, date)?;
        if inserted {
            fflog(conn, "checkin", &format!("user={user_id}"), &to_iso(date))?;
            info!(user_id, %date, "checked in");
        }
        Ok(inserted)
    }

    pub fn add_task(conn: &Connection, user_id: i64, task: &NewTask) -> AppResult<i64> {
        Self::require_user(conn, user_id)?;

        let id = queries::insert_task(conn, user_id, task)?;
        fflog(
            conn,
            "task_add",
            &format!("user={user_id} task={id}"),
            &task.title,
        )?;
        info!(user_id, task_id = id, "task created");
        Ok(id)
    }

    /// Move a task to `status`; `at` becomes its `updated_at`.
    pub fn set_task_status(
        conn: &Connection,
        user_id: i64,
        task_id: i64,
        status: TaskStatus,
        at: NaiveDateTime,
    ) -> AppResult<()> {
        let updated = queries::update_task_status(conn, user_id, task_id, status, at)?;
        if updated == 0 {
            return Err(AppError::TaskNotFound(task_id));
        }

        fflog(
            conn,
            "task_status",
            &format!("user={user_id} task={task_id}"),
            status.to_db_str(),
        )?;
        info!(user_id, task_id, status = status.to_db_str(), "task status changed");
        Ok(())
    }

    /// Record a focus session of `minutes` starting at `start`.
    /// Closed sessions end at `start + minutes`; open ones keep a null end.
    pub fn log_focus_session(
        conn: &Connection,
        user_id: i64,
        task_id: Option<i64>,
        minutes: i64,
        start: NaiveDateTime,
        open: bool,
    ) -> AppResult<i64> {
        if minutes <= 0 {
            return Err(AppError::InvalidDuration(minutes));
        }
        Self::require_user(conn, user_id)?;

        if let Some(tid) = task_id
            && queries::get_task(conn, user_id, tid)?.is_none()
        {
            return Err(AppError::TaskNotFound(tid));
        }

        let end_time = if open {
            None
        } else {
            let end = Duration::try_minutes(minutes)
                .and_then(|d| start.checked_add_signed(d))
                .ok_or(AppError::InvalidDuration(minutes))?;
            Some(end)
        };

        let session = NewFocusSession {
            task_id,
            duration_minutes: minutes,
            start_time: start,
            end_time,
        };

        let id = queries::insert_focus_session(conn, user_id, &session)?;
        let target = match task_id {
            Some(tid) => format!("user={user_id} task={tid}"),
            None => format!("user={user_id}"),
        };
        fflog(
            conn,
            "focus_log",
            &target,
            &format!("{minutes} min{}", if open { " (open)" } else { "" }),
        )?;
        info!(user_id, session_id = id, minutes, open, "focus session recorded");
        Ok(id)
    }

    fn require_user(conn: &Connection, user_id: i64) -> AppResult<()> {
        match queries::get_user(conn, user_id)? {
            Some(_) => Ok(()),
            None => Err(AppError::UserNotFound(user_id)),
        }
    }
}
