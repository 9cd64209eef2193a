use crate::cli::commands::open_pool;
use crate::cli::commands::trend::print_trend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::core::context::ViewContext;
use crate::core::report::{DashboardSummary, or_degraded};
use crate::db::queries::get_user;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, check_mark, color_for_rate};
use crate::utils::date;
use crate::utils::formatting::{bold, percent};
use crate::utils::time;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date: d } = cmd {
        let as_of = date::date_or_today(d.as_deref())?;

        let (view, summary) = or_degraded(load(cfg, as_of), || {
            let view = ViewContext::for_user(None, time::now());
            let summary =
                DashboardSummary::degraded(as_of, &cfg.report_settings(), &cfg.trend_options())?;
            Ok((view, summary))
        })?;

        print_dashboard(&view, &summary);
    }
    Ok(())
}

fn load(cfg: &Config, as_of: NaiveDate) -> AppResult<(ViewContext, DashboardSummary)> {
    let pool = open_pool(cfg)?;
    let user = get_user(&pool.conn, cfg.default_user)?;
    let view = ViewContext::for_user(user.as_ref(), time::now());

    let agg = ActivityAggregator::with_options(SqliteStore::new(&pool.conn), cfg.trend_options());
    let summary = DashboardSummary::build(&agg, cfg.default_user, as_of, &cfg.report_settings())?;
    Ok((view, summary))
}

fn print_dashboard(view: &ViewContext, d: &DashboardSummary) {
    header(format!("{}, {}", view.greeting, view.display_name));

    if d.degraded {
        warning("Stats are unavailable right now, showing an empty dashboard.");
    }

    println!(
        "{} {} {}",
        bold("Checked in today :"),
        check_mark(d.has_checked_in_today),
        d.as_of
    );
    println!(
        "{} {}/{} ({})",
        bold("Due today        :"),
        d.today_tasks.completed,
        d.today_tasks.total,
        percent(d.today_progress)
    );
    println!(
        "{} {} day(s), longest {}",
        bold("Streak           :"),
        d.streak_days,
        d.longest_streak
    );
    println!(
        "{} {} total, {} this month",
        bold("Check-ins        :"),
        d.checkins.total,
        d.checkins.this_month
    );
    println!(
        "{} {} in {} session(s) ({})",
        bold("This week focus  :"),
        d.week_focus,
        d.week_sessions.total,
        d.week
    );
    println!(
        "{} {}{}{RESET} ({}/{})\n",
        bold("Completion rate  :"),
        color_for_rate(d.completion_rate),
        percent(d.completion_rate),
        d.week_tasks.completed,
        d.week_tasks.total
    );

    print_trend(&d.trend);
}
