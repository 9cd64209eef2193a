//! Fixed-length daily trend series.
//!
//! A [`DailyTrend`] holds the check-ins, focus minutes and completed tasks of
//! a window, already bucketed by day. Entries are built on demand by
//! [`DailyTrend::iter`], which can be called any number of times; every pass
//! yields exactly one entry per day of the window, oldest first.

use crate::core::window::DateWindow;
use crate::models::focus_session::FocusTime;
use crate::models::task::CompletedTask;
use crate::utils::date::{to_iso, weekday_name};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::iter::FusedIterator;

/// Presentation knobs carried by the trend (from the configuration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendOptions {
    /// chrono format for the human date label, e.g. "%b %d".
    pub date_display_format: String,
    /// Shown instead of an empty course.
    pub course_placeholder: String,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            date_display_format: "%b %d".to_string(),
            course_placeholder: "No course info".to_string(),
        }
    }
}

impl TrendOptions {
    /// Format `day` with the configured pattern; ISO date if the pattern is unusable.
    pub fn display_date(&self, day: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", day.format(&self.date_display_format)) {
            Ok(()) => out,
            Err(_) => to_iso(day),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Course name, or the configured placeholder.
    pub course: String,
    pub completed_at: NaiveDateTime,
}

/// One day of the trend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendEntry {
    pub weekday: String,
    pub date: String,
    pub date_display: String,
    pub checked_in: bool,
    pub focus_minutes: i64,
    pub focus_time: FocusTime,
    pub tasks: Vec<TrendTask>,
    pub task_count: usize,
}

/// Shape of a checked-in day in the check-in details list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckedInDay {
    pub date: String,
    pub date_display: String,
    pub weekday: String,
    pub focus_minutes: i64,
    pub focus_time: FocusTime,
}

#[derive(Debug, Clone)]
pub struct DailyTrend {
    window: DateWindow,
    checkins: HashSet<NaiveDate>,
    focus: HashMap<NaiveDate, i64>,
    completed: HashMap<NaiveDate, Vec<CompletedTask>>,
    options: TrendOptions,
}

impl DailyTrend {
    /// Bucket ranged fetches by day. Rows outside the window are ignored.
    pub fn from_parts(
        window: DateWindow,
        checkin_dates: Vec<NaiveDate>,
        focus_by_day: Vec<(NaiveDate, i64)>,
        completed_tasks: Vec<CompletedTask>,
        options: TrendOptions,
    ) -> Self {
        let checkins = checkin_dates
            .into_iter()
            .filter(|d| window.contains(*d))
            .collect();

        let mut focus: HashMap<NaiveDate, i64> = HashMap::new();
        for (day, minutes) in focus_by_day {
            if window.contains(day) {
                *focus.entry(day).or_default() += minutes;
            }
        }

        // input order (newest first) is kept inside each bucket
        let mut completed: HashMap<NaiveDate, Vec<CompletedTask>> = HashMap::new();
        for task in completed_tasks {
            let day = task.completed_at.date();
            if window.contains(day) {
                completed.entry(day).or_default().push(task);
            }
        }

        Self {
            window,
            checkins,
            focus,
            completed,
            options,
        }
    }

    /// All-empty trend over the window, used for degraded views.
    pub fn empty(window: DateWindow, options: TrendOptions) -> Self {
        Self::from_parts(window, Vec::new(), Vec::new(), Vec::new(), options)
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn len(&self) -> usize {
        self.window.num_days() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> TrendIter<'_> {
        TrendIter {
            trend: self,
            next: Some(self.window.start()),
            remaining: self.len(),
        }
    }

    pub fn entries(&self) -> Vec<TrendEntry> {
        self.iter().collect()
    }

    pub fn total_focus_minutes(&self) -> i64 {
        self.focus.values().sum()
    }

    pub fn checked_in_days(&self) -> Vec<CheckedInDay> {
        checked_in_subset(self)
    }

    fn entry_for(&self, day: NaiveDate) -> TrendEntry {
        let focus_minutes = self.focus.get(&day).copied().unwrap_or(0);

        let tasks: Vec<TrendTask> = self
            .completed
            .get(&day)
            .map(|list| list.iter().map(|t| self.task_view(t)).collect())
            .unwrap_or_default();

        TrendEntry {
            weekday: weekday_name(day).to_string(),
            date: to_iso(day),
            date_display: self.options.display_date(day),
            checked_in: self.checkins.contains(&day),
            focus_minutes,
            focus_time: FocusTime::from_minutes(focus_minutes),
            task_count: tasks.len(),
            tasks,
        }
    }

    fn task_view(&self, t: &CompletedTask) -> TrendTask {
        let course = t
            .course
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.options.course_placeholder.clone());

        TrendTask {
            id: t.id,
            title: t.title.clone(),
            description: t.description.clone().unwrap_or_default(),
            course,
            completed_at: t.completed_at,
        }
    }
}

pub struct TrendIter<'a> {
    trend: &'a DailyTrend,
    next: Option<NaiveDate>,
    remaining: usize,
}

impl Iterator for TrendIter<'_> {
    type Item = TrendEntry;

    fn next(&mut self) -> Option<TrendEntry> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next?;
        self.remaining -= 1;
        self.next = day.succ_opt();
        Some(self.trend.entry_for(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TrendIter<'_> {}
impl FusedIterator for TrendIter<'_> {}

impl<'a> IntoIterator for &'a DailyTrend {
    type Item = TrendEntry;
    type IntoIter = TrendIter<'a>;

    fn into_iter(self) -> TrendIter<'a> {
        self.iter()
    }
}

/// Days of a trend with a check-in, order preserved.
pub fn checked_in_subset<I>(trend: I) -> Vec<CheckedInDay>
where
    I: IntoIterator<Item = TrendEntry>,
{
    trend
        .into_iter()
        .filter(|e| e.checked_in)
        .map(|e| CheckedInDay {
            date: e.date,
            date_display: e.date_display,
            weekday: e.weekday,
            focus_minutes: e.focus_minutes,
            focus_time: e.focus_time,
        })
        .collect()
}
