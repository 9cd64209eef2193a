//! Unified application error type.
//! Store, aggregator, recording layer and CLI all return AppError so the
//! presentation code can tell infrastructure failures apart from bad input.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    /// The event store could not be reached or a query failed.
    /// Callers render a degraded view instead of failing the whole page.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Window / parsing errors
    // ---------------------------
    #[error("Invalid window: end date {end} is before start date {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid number of days: {0} (must be at least 1)")]
    InvalidDayCount(i64),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Recording errors
    // ---------------------------
    #[error("Invalid focus duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Task {0} not found for this user")]
    TaskNotFound(i64),

    #[error("User {0} not found")]
    UserNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for failures of the underlying store (connection, query, row decoding).
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
