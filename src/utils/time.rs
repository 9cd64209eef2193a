//! Timestamp utilities. Timestamps are stored as local "YYYY-MM-DD HH:MM:SS",
//! the shape SQLite's date() understands.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};

pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn to_db(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Accepts "YYYY-MM-DD HH:MM:SS", "YYYY-MM-DD HH:MM" and the ISO "T" separator.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let t = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(t, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_timestamp(s)).transpose()
}
