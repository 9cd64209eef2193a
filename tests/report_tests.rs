mod common;
use common::{add_user, checkin, complete, d, focus, memory_pool, task, ts};
use focusflow::core::aggregator::ActivityAggregator;
use focusflow::core::context::{AVATAR_COLORS, ViewContext, avatar_color, avatar_initials, greeting_for};
use focusflow::core::report::{DashboardSummary, ReportSettings, WeeklyReport, or_degraded};
use focusflow::core::trend::TrendOptions;
use focusflow::db::queries::get_user;
use focusflow::db::store::SqliteStore;
use focusflow::errors::{AppError, AppResult};

#[test]
fn test_weekly_report_collects_window_stats() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    for day in ["2024-01-06", "2024-01-07"] {
        checkin(&pool.conn, user, day);
    }
    focus(&pool.conn, user, 50, "2024-01-06 09:00:00");
    focus(&pool.conn, user, 25, "2024-01-07 09:00:00");
    // before the 7-day window
    focus(&pool.conn, user, 120, "2023-12-20 09:00:00");
    let t1 = task(&pool.conn, user, "Slides", "2024-01-02 09:00:00", None);
    task(&pool.conn, user, "Summary", "2024-01-03 09:00:00", None);
    complete(&pool.conn, user, t1, "2024-01-07 17:45:00");

    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
    let report = WeeklyReport::build(&agg, user, d("2024-01-07"), &ReportSettings::default()).unwrap();

    assert!(!report.degraded);
    assert_eq!(report.window.start(), d("2024-01-01"));
    assert_eq!(report.stats.focus_time.to_string(), "1h 15m");
    assert_eq!(report.stats.sessions.total, 2);
    assert_eq!((report.stats.tasks.completed, report.stats.tasks.total), (1, 2));
    assert_eq!(report.stats.productivity_score, 50);
    assert_eq!(report.stats.streak_days, 2);
    assert_eq!(report.trend.len(), 7);
    assert_eq!(report.checked_in.len(), 2);
    assert_eq!(report.recent_completed.len(), 1);
    assert_eq!(report.recent_completed[0].completion_date, "01/07");
    assert_eq!(report.recent_completed[0].completion_time, "17:45");
}

#[test]
fn test_degraded_report_is_empty_but_full_length() {
    let settings = ReportSettings::default();
    let report = WeeklyReport::degraded(d("2024-01-07"), &settings, &TrendOptions::default()).unwrap();

    assert!(report.degraded);
    assert_eq!(report.stats.focus_time.total_minutes, 0);
    assert_eq!(report.stats.productivity_score, 0);
    assert_eq!(report.trend.len(), 7);
    assert!(report.trend.iter().all(|e| !e.checked_in && e.focus_minutes == 0));
    assert!(report.checked_in.is_empty());
    assert!(report.recent_completed.is_empty());
}

#[test]
fn test_dashboard_uses_week_so_far() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    checkin(&pool.conn, user, "2024-01-10");
    // Sunday of the previous week
    focus(&pool.conn, user, 40, "2024-01-07 09:00:00");
    focus(&pool.conn, user, 30, "2024-01-08 09:00:00");
    focus(&pool.conn, user, 30, "2024-01-10 09:00:00");
    // after the reference day
    focus(&pool.conn, user, 60, "2024-01-11 09:00:00");
    let due = task(&pool.conn, user, "Quiz prep", "2024-01-08 09:00:00", Some("2024-01-10"));
    complete(&pool.conn, user, due, "2024-01-10 08:00:00");

    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
    let dash = DashboardSummary::build(&agg, user, d("2024-01-10"), &ReportSettings::default()).unwrap();

    assert!(dash.has_checked_in_today);
    assert_eq!(dash.week.start(), d("2024-01-08"));
    assert_eq!(dash.week.end(), d("2024-01-10"));
    assert_eq!(dash.week_focus.total_minutes, 60);
    assert_eq!(dash.today_progress, 100);
    assert_eq!(dash.completion_rate, 100);
    assert_eq!(dash.streak_days, 1);
    assert_eq!(dash.trend.len(), 7);
}

#[test]
fn test_or_degraded_only_replaces_storage_failures() {
    let settings = ReportSettings::default();
    let options = TrendOptions::default();
    let as_of = d("2024-01-07");

    let storage: AppResult<WeeklyReport> =
        Err(AppError::StorageUnavailable(rusqlite::Error::InvalidQuery));
    let report = or_degraded(storage, || WeeklyReport::degraded(as_of, &settings, &options)).unwrap();
    assert!(report.degraded);

    let bad_input: AppResult<WeeklyReport> = Err(AppError::InvalidDayCount(0));
    let err = or_degraded(bad_input, || WeeklyReport::degraded(as_of, &settings, &options)).unwrap_err();
    assert!(matches!(err, AppError::InvalidDayCount(0)));
}

#[test]
fn test_report_on_unmigrated_store_fails_with_storage_error() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let agg = ActivityAggregator::new(SqliteStore::new(&conn));
    let err = WeeklyReport::build(&agg, 1, d("2024-01-07"), &ReportSettings::default()).unwrap_err();
    assert!(err.is_storage_unavailable());
}

#[test]
fn test_greeting_boundaries() {
    assert_eq!(greeting_for(0), "Good morning");
    assert_eq!(greeting_for(11), "Good morning");
    assert_eq!(greeting_for(12), "Good afternoon");
    assert_eq!(greeting_for(17), "Good afternoon");
    assert_eq!(greeting_for(18), "Good evening");
    assert_eq!(greeting_for(23), "Good evening");
}

#[test]
fn test_avatar_initials_and_color() {
    assert_eq!(avatar_initials("ada", "lovelace"), "AL");
    assert_eq!(avatar_initials("Ada", ""), "AU");
    assert_eq!(avatar_initials("  ", "Lovelace"), "UL");
    assert_eq!(avatar_initials("", ""), "UU");

    assert_eq!(avatar_color(3), avatar_color(3));
    assert!(AVATAR_COLORS.contains(&avatar_color(12345)));
}

#[test]
fn test_view_context_for_user() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Grace");
    let row = get_user(&pool.conn, user).unwrap();

    let view = ViewContext::for_user(row.as_ref(), ts("2024-01-07 19:30:00"));
    assert_eq!(view.greeting, "Good evening");
    assert_eq!(view.display_name, "Grace");
    assert_eq!(view.avatar_initials, "GT");

    let anon = ViewContext::for_user(None, ts("2024-01-07 08:00:00"));
    assert_eq!(anon.avatar_initials, "UU");
    assert_eq!(anon.display_name, "User");
}
