//! Report view models: the weekly report and the dashboard.
//!
//! Builders fail with `StorageUnavailable` when the store does; the caller
//! decides whether to fall back to the `degraded` variant via [`or_degraded`].

use crate::core::aggregator::ActivityAggregator;
use crate::core::trend::{CheckedInDay, DailyTrend, TrendEntry, TrendOptions};
use crate::core::window::DateWindow;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::checkin::CheckinTotals;
use crate::models::focus_session::{FocusTime, SessionCounts};
use crate::models::task::{CompletedTask, TaskCounts};
use crate::models::task_status::TaskDateField;
use crate::utils::date::to_iso;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub trend_days: i64,
    pub completion_basis: TaskDateField,
    pub recent_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            trend_days: 7,
            completion_basis: TaskDateField::CreatedAt,
            recent_limit: 20,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WeeklyStats {
    pub focus_time: FocusTime,
    pub sessions: SessionCounts,
    pub tasks: TaskCounts,
    /// Task completion rate over the window, in percent.
    pub productivity_score: u32,
    pub streak_days: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecentTask {
    pub id: i64,
    pub title: String,
    pub course: Option<String>,
    pub completion_date: String,
    pub completion_time: String,
}

impl From<CompletedTask> for RecentTask {
    fn from(t: CompletedTask) -> Self {
        Self {
            id: t.id,
            title: t.title,
            course: t.course.filter(|c| !c.trim().is_empty()),
            completion_date: t.completed_at.format("%m/%d").to_string(),
            completion_time: t.completed_at.format("%H:%M").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklyReport {
    pub window: DateWindow,
    pub stats: WeeklyStats,
    pub trend: Vec<TrendEntry>,
    pub checked_in: Vec<CheckedInDay>,
    pub recent_completed: Vec<RecentTask>,
    pub degraded: bool,
}

impl WeeklyReport {
    /// The `trend_days` days ending at `as_of`.
    pub fn build<S: EventStore>(
        agg: &ActivityAggregator<S>,
        user_id: i64,
        as_of: NaiveDate,
        settings: &ReportSettings,
    ) -> AppResult<Self> {
        let window = DateWindow::last_n_days(as_of, settings.trend_days)?;
        let (start, end) = (window.start(), window.end());

        let focus_minutes = agg.window_focus_minutes(user_id, start, end)?;
        let sessions = agg.window_session_counts(user_id, start, end)?;
        let tasks = agg.window_task_counts(user_id, start, end, settings.completion_basis)?;
        let streak_days = agg.streak_days(user_id, as_of)?;
        let trend = agg.trend_for_window(user_id, window)?;
        let recent = agg.recent_completed_tasks(user_id, settings.recent_limit)?;

        Ok(Self {
            window,
            stats: WeeklyStats {
                focus_time: FocusTime::from_minutes(focus_minutes),
                sessions,
                tasks,
                productivity_score: tasks.completion_rate(),
                streak_days,
            },
            checked_in: trend.checked_in_days(),
            trend: trend.entries(),
            recent_completed: recent.into_iter().map(RecentTask::from).collect(),
            degraded: false,
        })
    }

    /// All-zero report with a full-length empty trend.
    pub fn degraded(
        as_of: NaiveDate,
        settings: &ReportSettings,
        options: &TrendOptions,
    ) -> AppResult<Self> {
        let window = DateWindow::last_n_days(as_of, settings.trend_days)?;
        let trend = DailyTrend::empty(window, options.clone());

        Ok(Self {
            window,
            stats: WeeklyStats::default(),
            trend: trend.entries(),
            checked_in: Vec::new(),
            recent_completed: Vec::new(),
            degraded: true,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub as_of: String,
    pub has_checked_in_today: bool,
    /// Tasks due on `as_of`.
    pub today_tasks: TaskCounts,
    pub today_progress: u32,
    pub streak_days: u32,
    pub longest_streak: u32,
    pub checkins: CheckinTotals,
    /// Monday of the current week up to `as_of`.
    pub week: DateWindow,
    pub week_focus: FocusTime,
    pub week_sessions: SessionCounts,
    pub week_tasks: TaskCounts,
    pub completion_rate: u32,
    pub trend: Vec<TrendEntry>,
    pub degraded: bool,
}

impl DashboardSummary {
    pub fn build<S: EventStore>(
        agg: &ActivityAggregator<S>,
        user_id: i64,
        as_of: NaiveDate,
        settings: &ReportSettings,
    ) -> AppResult<Self> {
        let week = DateWindow::week_of(as_of)?.up_to(as_of)?;
        let (start, end) = (week.start(), week.end());

        let today_tasks = agg.tasks_due_on(user_id, as_of)?;
        let week_tasks = agg.window_task_counts(user_id, start, end, settings.completion_basis)?;
        let trend = agg.daily_trend(user_id, settings.trend_days, as_of)?;

        Ok(Self {
            as_of: to_iso(as_of),
            has_checked_in_today: agg.has_checked_in(user_id, as_of)?,
            today_progress: today_tasks.completion_rate(),
            today_tasks,
            streak_days: agg.streak_days(user_id, as_of)?,
            longest_streak: agg.longest_streak(user_id)?,
            checkins: agg.checkin_totals(user_id, as_of)?,
            week,
            week_focus: FocusTime::from_minutes(agg.window_focus_minutes(user_id, start, end)?),
            week_sessions: agg.window_session_counts(user_id, start, end)?,
            completion_rate: week_tasks.completion_rate(),
            week_tasks,
            trend: trend.entries(),
            degraded: false,
        })
    }

    pub fn degraded(
        as_of: NaiveDate,
        settings: &ReportSettings,
        options: &TrendOptions,
    ) -> AppResult<Self> {
        let week = DateWindow::week_of(as_of)?.up_to(as_of)?;
        let trend = DailyTrend::empty(
            DateWindow::last_n_days(as_of, settings.trend_days)?,
            options.clone(),
        );

        Ok(Self {
            as_of: to_iso(as_of),
            has_checked_in_today: false,
            today_tasks: TaskCounts::default(),
            today_progress: 0,
            streak_days: 0,
            longest_streak: 0,
            checkins: CheckinTotals::default(),
            week,
            week_focus: FocusTime::default(),
            week_sessions: SessionCounts::default(),
            week_tasks: TaskCounts::default(),
            completion_rate: 0,
            trend: trend.entries(),
            degraded: true,
        })
    }
}

/// Substitute the degraded view when (and only when) the store is unavailable.
pub fn or_degraded<T>(
    built: AppResult<T>,
    fallback: impl FnOnce() -> AppResult<T>,
) -> AppResult<T> {
    match built {
        Err(e) if e.is_storage_unavailable() => {
            warn!(error = %e, "stats unavailable, rendering degraded view");
            fallback()
        }
        other => other,
    }
}
