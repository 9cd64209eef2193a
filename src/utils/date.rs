use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub const DATE_FMT: &str = "%Y-%m-%d";

/// "Today" in the server's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an optional CLI date, falling back to today.
pub fn date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Ok(today()),
    }
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Last day of the given month, `None` for an invalid month.
pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
