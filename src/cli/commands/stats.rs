//! `focus-total` and `rate`: window aggregates.

use crate::cli::commands::{open_pool, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::focus_session::FocusTime;
use crate::utils::colors::{RESET, color_for_rate};
use crate::utils::formatting::{bold, percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::FocusTotal { range } => {
            let window = resolve_window(range)?;
            let pool = open_pool(cfg)?;
            let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
            let user_id = cfg.default_user;

            let minutes = agg.window_focus_minutes(user_id, window.start(), window.end())?;
            let sessions = agg.window_session_counts(user_id, window.start(), window.end())?;

            println!("⏱️  {} {window}", bold("Focus time"));
            println!("   total    : {}", FocusTime::from_minutes(minutes));
            println!(
                "   sessions : {} ({} completed)",
                sessions.total, sessions.completed
            );
        }
        Commands::Rate { range, by } => {
            let window = resolve_window(range)?;
            let basis = by.unwrap_or(cfg.completion_basis);
            let pool = open_pool(cfg)?;
            let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));

            let counts =
                agg.window_task_counts(cfg.default_user, window.start(), window.end(), basis)?;
            let rate = counts.completion_rate();

            println!("✅ {} {window} (by {})", bold("Task completion"), basis.column());
            println!(
                "   {}{}{RESET}  {} of {} tasks",
                color_for_rate(rate),
                percent(rate),
                counts.completed,
                counts.total
            );
        }
        _ => {}
    }
    Ok(())
}
