use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive `[start, end]` calendar-day range scoping an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The `n` days ending at `as_of`, both included.
    pub fn last_n_days(as_of: NaiveDate, n: i64) -> AppResult<Self> {
        if n < 1 {
            return Err(AppError::InvalidDayCount(n));
        }
        let start = as_of
            .checked_sub_days(Days::new((n - 1) as u64))
            .ok_or(AppError::InvalidDayCount(n))?;
        Ok(Self { start, end: as_of })
    }

    /// Monday..Sunday week containing `day`.
    /// Fails when the week runs past the range chrono can represent.
    pub fn week_of(day: NaiveDate) -> AppResult<Self> {
        let offset = day.weekday().num_days_from_monday() as u64;
        let start = day
            .checked_sub_days(Days::new(offset))
            .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
        let end = start
            .checked_add_days(Days::new(6))
            .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
        Ok(Self { start, end })
    }

    /// Calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day(1).unwrap_or(day);
        let last = month_last_day(day.year(), day.month()).unwrap_or(28);
        let end = day.with_day(last).unwrap_or(day);
        Self { start, end }
    }

    /// Same start, end clamped to `as_of` ("week so far", "month so far").
    pub fn up_to(self, as_of: NaiveDate) -> AppResult<Self> {
        Self::new(self.start, self.end.min(as_of))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Dates of the window, ascending.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
