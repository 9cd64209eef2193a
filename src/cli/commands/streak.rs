use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streak { date: d } = cmd {
        let as_of = date::date_or_today(d.as_deref())?;
        let pool = open_pool(cfg)?;
        let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
        let user_id = cfg.default_user;

        let current = agg.streak_days(user_id, as_of)?;
        let longest = agg.longest_streak(user_id)?;
        let totals = agg.checkin_totals(user_id, as_of)?;

        println!("🔥 {} {CYAN}{current}{RESET} day(s) as of {as_of}", bold("Current streak:"));
        println!("🏆 {} {longest} day(s)", bold("Longest streak:"));
        println!(
            "📅 {} {} total, {} this month",
            bold("Check-ins:"),
            totals.total,
            totals.this_month
        );
    }
    Ok(())
}
