pub mod checkin;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod focus;
pub mod init;
pub mod log;
pub mod report;
pub mod stats;
pub mod streak;
pub mod task;
pub mod trend;
pub mod user;

use crate::config::Config;
use crate::core::range::parse_range;
use crate::core::window::DateWindow;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let path = cfg.database_path();
    let pool = DbPool::new(&path.to_string_lossy())?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// `--range` if given, otherwise the current week up to today.
pub(crate) fn resolve_window(range: &Option<String>) -> AppResult<DateWindow> {
    match range {
        Some(r) => parse_range(r),
        None => {
            let today = date::today();
            DateWindow::week_of(today)?.up_to(today)
        }
    }
}
