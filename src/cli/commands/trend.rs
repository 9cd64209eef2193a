use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::core::trend::{CheckedInDay, TrendEntry, checked_in_subset};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET, check_mark, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::bar;
use crate::utils::table::{Column, Table};

/// Minutes per bar block in the trend chart.
const BAR_UNIT: i64 = 15;
const BAR_MAX: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend {
        days,
        date: d,
        checked_in,
    } = cmd
    {
        let as_of = date::date_or_today(d.as_deref())?;
        let num_days = days.unwrap_or(cfg.trend_days);

        let pool = open_pool(cfg)?;
        let agg = ActivityAggregator::with_options(SqliteStore::new(&pool.conn), cfg.trend_options());
        let trend = agg.daily_trend(cfg.default_user, num_days, as_of)?;

        if *checked_in {
            let days = checked_in_subset(trend.iter());
            if days.is_empty() {
                info(format!("No check-ins in {}", trend.window()));
            } else {
                print_checked_in(&days);
            }
        } else {
            print_trend(&trend.entries());
        }
    }
    Ok(())
}

pub(crate) fn print_trend(entries: &[TrendEntry]) {
    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("Day", 10),
        Column::new("In", 3),
        Column::new("Focus", 9),
        Column::new("", BAR_MAX),
        Column::new("Tasks", 5),
    ]);

    for e in entries {
        table.add_row(vec![
            e.date_display.clone(),
            e.weekday.clone(),
            check_mark(e.checked_in),
            colorize_optional(&e.focus_time.to_string()),
            format!("{CYAN}{}{RESET}", bar(e.focus_minutes, BAR_UNIT, BAR_MAX)),
            colorize_optional(&e.task_count.to_string()),
        ]);
    }

    print!("{}", table.render());
}

pub(crate) fn print_checked_in(days: &[CheckedInDay]) {
    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("Day", 10),
        Column::new("Focus", 9),
    ]);

    for d in days {
        table.add_row(vec![
            d.date_display.clone(),
            d.weekday.clone(),
            colorize_optional(&d.focus_time.to_string()),
        ]);
    }

    print!("{}", table.render());
}
