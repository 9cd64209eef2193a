mod common;
use common::{add_user, checkin, complete, d, focus, memory_pool, task};
use focusflow::core::aggregator::ActivityAggregator;
use focusflow::core::trend::{DailyTrend, TrendEntry, TrendOptions, checked_in_subset};
use focusflow::core::window::DateWindow;
use focusflow::db::store::SqliteStore;
use focusflow::models::task::CompletedTask;
use focusflow::models::task_status::TaskStatus;

#[test]
fn test_trend_has_one_entry_per_day_even_without_data() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));

    let trend = agg.daily_trend(user, 7, d("2024-01-07")).unwrap();
    let entries = trend.entries();

    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0].date, "2024-01-01");
    assert_eq!(entries[6].date, "2024-01-07");
    assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
    assert!(entries.iter().all(|e| !e.checked_in && e.focus_minutes == 0 && e.task_count == 0));
}

#[test]
fn test_trend_buckets_activity_by_day() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    checkin(&pool.conn, user, "2024-01-03");
    focus(&pool.conn, user, 25, "2024-01-03 08:00:00");
    focus(&pool.conn, user, 35, "2024-01-03 20:00:00");
    focus(&pool.conn, user, 90, "2024-01-05 10:00:00");
    let t = task(&pool.conn, user, "Problem set", "2024-01-01 09:00:00", None);
    complete(&pool.conn, user, t, "2024-01-05 18:30:00");

    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
    let trend = agg.daily_trend(user, 7, d("2024-01-07")).unwrap();
    let entries = trend.entries();

    let jan3 = &entries[2];
    assert_eq!(jan3.weekday, "Wednesday");
    assert!(jan3.checked_in);
    assert_eq!(jan3.focus_minutes, 60);
    assert_eq!(jan3.focus_time.to_string(), "1h 0m");

    let jan5 = &entries[4];
    assert!(!jan5.checked_in);
    assert_eq!(jan5.focus_time.hours, 1);
    assert_eq!(jan5.focus_time.minutes, 30);
    assert_eq!(jan5.task_count, 1);
    assert_eq!(jan5.tasks[0].title, "Problem set");
    assert_eq!(jan5.tasks[0].course, "No course info");
    assert_eq!(jan5.tasks[0].description, "");

    assert_eq!(trend.total_focus_minutes(), 150);
}

#[test]
fn test_trend_can_be_iterated_again() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    checkin(&pool.conn, user, "2024-01-02");
    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
    let trend = agg.daily_trend(user, 3, d("2024-01-03")).unwrap();

    let first: Vec<_> = trend.iter().collect();
    let second: Vec<_> = (&trend).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(trend.iter().len(), 3);
}

#[test]
fn test_checked_in_subset_keeps_order() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    for day in ["2024-01-06", "2024-01-02", "2024-01-04"] {
        checkin(&pool.conn, user, day);
    }
    focus(&pool.conn, user, 45, "2024-01-04 09:00:00");

    let agg = ActivityAggregator::new(SqliteStore::new(&pool.conn));
    let trend = agg.daily_trend(user, 7, d("2024-01-07")).unwrap();
    let days = checked_in_subset(trend.iter());

    let dates: Vec<&str> = days.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-02", "2024-01-04", "2024-01-06"]);
    assert_eq!(days[1].focus_minutes, 45);
    assert_eq!(days[1].weekday, "Thursday");

    assert!(checked_in_subset(Vec::<TrendEntry>::new()).is_empty());
}

#[test]
fn test_from_parts_ignores_rows_outside_window() {
    let window = DateWindow::new(d("2024-01-01"), d("2024-01-02")).unwrap();
    let stray = CompletedTask {
        id: 9,
        title: "Old".into(),
        description: Some("kept out".into()),
        course: Some("History".into()),
        completed_at: common::ts("2023-12-31 23:00:00"),
    };
    let trend = DailyTrend::from_parts(
        window,
        vec![d("2023-12-31"), d("2024-01-02")],
        vec![(d("2024-01-05"), 30), (d("2024-01-01"), 10)],
        vec![stray],
        TrendOptions::default(),
    );

    let entries = trend.entries();
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].checked_in);
    assert!(entries[1].checked_in);
    assert_eq!(entries[0].focus_minutes, 10);
    assert_eq!(trend.total_focus_minutes(), 10);
    assert!(entries.iter().all(|e| e.task_count == 0));
}

#[test]
fn test_display_options_are_applied() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    let t = task(&pool.conn, user, "Essay", "2024-01-01 09:00:00", None);
    pool.conn
        .execute("UPDATE tasks SET course = 'Literature' WHERE id = ?1", [t])
        .unwrap();
    focusflow::core::record::RecordLogic::set_task_status(
        &pool.conn,
        user,
        t,
        TaskStatus::Completed,
        common::ts("2024-01-02 10:00:00"),
    )
    .unwrap();

    let options = TrendOptions {
        date_display_format: "%d/%m".into(),
        course_placeholder: "n/a".into(),
    };
    let agg = ActivityAggregator::with_options(SqliteStore::new(&pool.conn), options);
    let entries = agg.daily_trend(user, 2, d("2024-01-02")).unwrap().entries();

    assert_eq!(entries[1].date_display, "02/01");
    assert_eq!(entries[1].tasks[0].course, "Literature");
}
