use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::core::record::RecordLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { date: d } = cmd {
        let day = date::date_or_today(d.as_deref())?;
        let pool = open_pool(cfg)?;
        let user_id = cfg.default_user;

        if RecordLogic::check_in(&pool.conn, user_id, day)? {
            let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
            let streak = agg.streak_days(user_id, day)?;
            success(format!("Checked in for {day}. Streak: {streak} day(s)"));
        } else {
            warning(format!("Already checked in for {day}."));
        }
    }
    Ok(())
}
