use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::core::range::parse_range;
use crate::core::window::DateWindow;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        days,
        range,
        force,
    } = cmd
    {
        let window = match range {
            Some(r) => parse_range(r)?,
            None => DateWindow::last_n_days(date::today(), days.unwrap_or(cfg.trend_days))?,
        };

        let pool = open_pool(cfg)?;
        let agg = ActivityAggregator::with_options(SqliteStore::new(&pool.conn), cfg.trend_options());
        ExportLogic::export(&agg, cfg.default_user, window, *format, file, *force)?;
    }
    Ok(())
}
