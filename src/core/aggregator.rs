//! Activity aggregator: streaks, focus totals, completion rates and the
//! daily trend, computed from a user's check-ins, tasks and focus sessions.
//!
//! All operations are reads against an [`EventStore`]. Empty history yields
//! zeros and empty lists; only store failures and invalid windows are errors.

use crate::core::trend::{DailyTrend, TrendOptions};
use crate::core::window::DateWindow;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::checkin::CheckinTotals;
use crate::models::focus_session::SessionCounts;
use crate::models::task::{CompletedTask, TaskCounts};
use crate::models::task_status::{TaskDateField, TaskStatus};
use chrono::NaiveDate;
use tracing::debug;

pub struct ActivityAggregator<S: EventStore> {
    store: S,
    options: TrendOptions,
}

impl<S: EventStore> ActivityAggregator<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, TrendOptions::default())
    }

    pub fn with_options(store: S, options: TrendOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &TrendOptions {
        &self.options
    }

    // ---------------------------
    // Check-ins
    // ---------------------------

    /// Consecutive check-in days ending at `as_of`. Zero without a check-in on `as_of`.
    pub fn streak_days(&self, user_id: i64, as_of: NaiveDate) -> AppResult<u32> {
        let dates = self.store.list_checkin_dates(user_id)?;
        let streak = streak_from_dates(&dates, as_of);
        debug!(user_id, %as_of, streak, "computed streak");
        Ok(streak)
    }

    /// Longest run of consecutive check-in days in the whole history.
    pub fn longest_streak(&self, user_id: i64) -> AppResult<u32> {
        let dates = self.store.list_checkin_dates(user_id)?;
        Ok(longest_run(&dates))
    }

    /// Total check-ins, and those of the month of `as_of` up to that day.
    pub fn checkin_totals(&self, user_id: i64, as_of: NaiveDate) -> AppResult<CheckinTotals> {
        let dates = self.store.list_checkin_dates(user_id)?;
        let month = DateWindow::month_of(as_of).up_to(as_of)?;

        Ok(CheckinTotals {
            total: dates.len() as i64,
            this_month: dates.iter().filter(|d| month.contains(**d)).count() as i64,
        })
    }

    pub fn has_checked_in(&self, user_id: i64, day: NaiveDate) -> AppResult<bool> {
        let dates = self
            .store
            .checkin_dates_between(user_id, &DateWindow::single(day))?;
        Ok(!dates.is_empty())
    }

    // ---------------------------
    // Focus sessions
    // ---------------------------

    /// Minutes of every session started in `[start, end]`, finished or not.
    pub fn window_focus_minutes(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<i64> {
        let window = DateWindow::new(start, end)?;
        self.store.sum_focus_minutes(user_id, &window)
    }

    /// `(total, completed)` sessions started in `[start, end]`.
    pub fn window_session_counts(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<SessionCounts> {
        let window = DateWindow::new(start, end)?;
        self.store.count_focus_sessions(user_id, &window)
    }

    // ---------------------------
    // Tasks
    // ---------------------------

    pub fn window_task_counts(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        date_field: TaskDateField,
    ) -> AppResult<TaskCounts> {
        let window = DateWindow::new(start, end)?;
        let total = self.store.count_tasks(user_id, &window, date_field, None)?;
        let completed = if total == 0 {
            0
        } else {
            self.store
                .count_tasks(user_id, &window, date_field, Some(TaskStatus::Completed))?
        };
        Ok(TaskCounts { completed, total })
    }

    /// Truncated percentage of completed tasks among those whose `date_field`
    /// falls in `[start, end]`. Zero when there are none.
    pub fn window_task_completion_rate(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        date_field: TaskDateField,
    ) -> AppResult<u32> {
        let counts = self.window_task_counts(user_id, start, end, date_field)?;
        Ok(counts.completion_rate())
    }

    pub fn tasks_due_on(&self, user_id: i64, day: NaiveDate) -> AppResult<TaskCounts> {
        self.store.count_tasks_due_on(user_id, day)
    }

    pub fn recent_completed_tasks(
        &self,
        user_id: i64,
        limit: usize,
    ) -> AppResult<Vec<CompletedTask>> {
        self.store.recent_completed_tasks(user_id, limit)
    }

    // ---------------------------
    // Trend
    // ---------------------------

    /// `num_days` entries ending at `as_of`, ascending.
    pub fn daily_trend(
        &self,
        user_id: i64,
        num_days: i64,
        as_of: NaiveDate,
    ) -> AppResult<DailyTrend> {
        let window = DateWindow::last_n_days(as_of, num_days)?;
        self.trend_for_window(user_id, window)
    }

    /// One ranged read per stream, bucketed by day.
    pub fn trend_for_window(&self, user_id: i64, window: DateWindow) -> AppResult<DailyTrend> {
        debug!(user_id, %window, "building daily trend");
        let checkins = self.store.checkin_dates_between(user_id, &window)?;
        let focus = self.store.focus_minutes_by_day(user_id, &window)?;
        let tasks = self.store.completed_tasks_between(user_id, &window)?;

        Ok(DailyTrend::from_parts(
            window,
            checkins,
            focus,
            tasks,
            self.options.clone(),
        ))
    }
}

/// Walk newest-first check-in dates back from `as_of` while days are consecutive.
pub fn streak_from_dates(dates_desc: &[NaiveDate], as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = as_of;

    for &d in dates_desc {
        if d > cursor {
            // after as_of, or a duplicate of a day already counted
            continue;
        }
        if d != cursor {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive days in a list of dates (any order).
pub fn longest_run(dates: &[NaiveDate]) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = 0;
    let mut current = 0;
    let mut prev: Option<NaiveDate> = None;

    for d in sorted {
        current = match prev {
            Some(p) if p.succ_opt() == Some(d) => current + 1,
            _ => 1,
        };
        best = best.max(current);
        prev = Some(d);
    }

    best
}
