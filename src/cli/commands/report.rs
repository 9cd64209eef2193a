use crate::cli::commands::open_pool;
use crate::cli::commands::trend::{print_checked_in, print_trend};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::ActivityAggregator;
use crate::core::context::ViewContext;
use crate::core::report::{WeeklyReport, or_degraded};
use crate::db::queries::get_user;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_rate};
use crate::utils::date;
use crate::utils::formatting::{bold, percent};
use crate::utils::time;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date: d } = cmd {
        let as_of = date::date_or_today(d.as_deref())?;

        let (view, report) = or_degraded(load(cfg, as_of), || {
            let view = ViewContext::for_user(None, time::now());
            let report =
                WeeklyReport::degraded(as_of, &cfg.report_settings(), &cfg.trend_options())?;
            Ok((view, report))
        })?;

        print_report(&view, &report);
    }
    Ok(())
}

fn load(cfg: &Config, as_of: NaiveDate) -> AppResult<(ViewContext, WeeklyReport)> {
    let pool = open_pool(cfg)?;
    let user = get_user(&pool.conn, cfg.default_user)?;
    let view = ViewContext::for_user(user.as_ref(), time::now());

    let agg = ActivityAggregator::with_options(SqliteStore::new(&pool.conn), cfg.trend_options());
    let report = WeeklyReport::build(&agg, cfg.default_user, as_of, &cfg.report_settings())?;
    Ok((view, report))
}

fn print_report(view: &ViewContext, r: &WeeklyReport) {
    header(format!("Weekly report {}", r.window));
    println!("{}, {} [{}]\n", view.greeting, view.display_name, view.avatar_initials);

    if r.degraded {
        warning("Stats are unavailable right now, showing an empty report.");
    }

    let s = &r.stats;
    println!("{} {}", bold("Focus time   :"), s.focus_time);
    println!(
        "{} {} ({} completed)",
        bold("Sessions     :"),
        s.sessions.total,
        s.sessions.completed
    );
    println!(
        "{} {} of {}",
        bold("Tasks done   :"),
        s.tasks.completed,
        s.tasks.total
    );
    println!(
        "{} {}{}{RESET}",
        bold("Productivity :"),
        color_for_rate(s.productivity_score),
        percent(s.productivity_score)
    );
    println!("{} {} day(s)\n", bold("Streak       :"), s.streak_days);

    print_trend(&r.trend);

    if !r.checked_in.is_empty() {
        println!("\n{}", bold("Check-ins"));
        print_checked_in(&r.checked_in);
    }

    if !r.recent_completed.is_empty() {
        println!("\n{}", bold("Recently completed"));
        for t in &r.recent_completed {
            let course = t
                .course
                .as_deref()
                .map(|c| format!(" [{c}]"))
                .unwrap_or_default();
            println!(
                "  {} {}  #{} {}{}",
                t.completion_date, t.completion_time, t.id, t.title, course
            );
        }
    }
}
