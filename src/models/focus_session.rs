use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Input for the recording layer. `end_time = None` leaves the session open.
#[derive(Debug, Clone)]
pub struct NewFocusSession {
    pub task_id: Option<i64>,
    pub duration_minutes: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SessionCounts {
    pub total: i64,
    /// Sessions with a non-null `end_time`.
    pub completed: i64,
}

/// Minutes split into an (hours, minutes) pair for display.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FocusTime {
    pub total_minutes: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl FocusTime {
    pub fn from_minutes(total_minutes: i64) -> Self {
        Self {
            total_minutes,
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for FocusTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
