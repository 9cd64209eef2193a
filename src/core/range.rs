// src/core/range.rs

use crate::core::window::DateWindow;
use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse a --range expression (year / month / day / interval) into a window.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// An interval whose end precedes its start is rejected as an invalid window.
pub fn parse_range(r: &str) -> AppResult<DateWindow> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{r}: start and end must have the same format"
            )));
        }

        let (first, _) = bounds(start)?;
        let (_, last) = bounds(end)?;
        DateWindow::new(first, last)
    } else {
        let (first, last) = bounds(r)?;
        DateWindow::new(first, last)
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(token.to_string());

    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = token
                .get(0..4)
                .and_then(|s| s.parse().ok())
                .ok_or_else(invalid)?;
            let m: u32 = token
                .get(5..7)
                .and_then(|s| s.parse().ok())
                .ok_or_else(invalid)?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
