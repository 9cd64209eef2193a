use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ff, init_db_with_user, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    ff().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    ff().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_checkin_and_streak() {
    let db_path = setup_test_db("cli_checkin_streak");
    init_db_with_user(&db_path);

    for day in ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"] {
        ff().args(["--db", &db_path, "checkin", "--date", day])
            .assert()
            .success()
            .stdout(contains("Checked in"));
    }

    ff().args(["--db", &db_path, "checkin", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("Already checked in"));

    ff().args(["--db", &db_path, "streak", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("Current streak:").and(contains("1")))
        .stdout(contains("Longest streak:").and(contains("3 day(s)")));
}

#[test]
fn test_focus_total_end_to_end() {
    let db_path = setup_test_db("cli_focus_total");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "focus", "log", "--minutes", "20", "--start", "2024-01-05 09:00"])
        .assert()
        .success();
    ff().args(["--db", &db_path, "focus", "log", "--minutes", "40", "--start", "2024-01-05 14:00"])
        .assert()
        .success();

    ff().args(["--db", &db_path, "focus-total", "--range", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("1h 0m"))
        .stdout(contains("2 (2 completed)"));
}

#[test]
fn test_focus_log_rejects_zero_minutes() {
    let db_path = setup_test_db("cli_focus_zero");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "focus", "log", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid focus duration"));
}

#[test]
fn test_task_flow_and_rate() {
    let db_path = setup_test_db("cli_task_rate");
    init_db_with_user(&db_path);

    for title in ["Essay", "Lab", "Reading"] {
        ff().args(["--db", &db_path, "task", "add", title, "--course", "Physics"])
            .assert()
            .success()
            .stdout(contains("created"));
    }

    ff().args(["--db", &db_path, "task", "status", "1", "done"])
        .assert()
        .success()
        .stdout(contains("completed"));

    ff().args(["--db", &db_path, "rate"])
        .assert()
        .success()
        .stdout(contains("33%"))
        .stdout(contains("1 of 3 tasks"));

    ff().args(["--db", &db_path, "task", "status", "99", "done"])
        .assert()
        .failure()
        .stderr(contains("Task 99 not found"));
}

#[test]
fn test_rate_by_due_date() {
    let db_path = setup_test_db("cli_rate_by_due");
    init_db_with_user(&db_path);

    for title in ["Essay", "Lab"] {
        ff().args(["--db", &db_path, "task", "add", title, "--due", "2024-03-05"])
            .assert()
            .success();
    }
    ff().args(["--db", &db_path, "task", "status", "2", "completed"])
        .assert()
        .success();

    ff().args(["--db", &db_path, "rate", "--by", "due_date", "--range", "2024-03"])
        .assert()
        .success()
        .stdout(contains("1 of 2 tasks"))
        .stdout(contains("(by due_date)"));

    ff().args(["--db", &db_path, "rate", "--by", "due-date"])
        .assert()
        .failure();
}

#[test]
fn test_dashboard_rejects_date_past_calendar_range() {
    let db_path = setup_test_db("cli_dashboard_max_date");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "dashboard", "--date", "+262142-12-31"])
        .assert()
        .code(1)
        .stderr(contains("Error:"));
}

#[test]
fn test_trend_table_and_checked_in_filter() {
    let db_path = setup_test_db("cli_trend");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "checkin", "--date", "2024-01-03"])
        .assert()
        .success();

    ff().args(["--db", &db_path, "trend", "--days", "7", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Sunday"));

    ff().args(["--db", &db_path, "trend", "--date", "2024-01-07", "--checked-in"])
        .assert()
        .success()
        .stdout(contains("Wednesday"))
        .stdout(contains("Monday").not());

    ff().args(["--db", &db_path, "trend", "--days", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid number of days"));
}

#[test]
fn test_inverted_range_is_an_error() {
    let db_path = setup_test_db("cli_inverted_range");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "focus-total", "--range", "2024-02-01:2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid window"));
}

#[test]
fn test_report_and_dashboard() {
    let db_path = setup_test_db("cli_report");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "checkin", "--date", "2024-01-07"])
        .assert()
        .success();

    ff().args(["--db", &db_path, "report", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Weekly report 2024-01-01..=2024-01-07"))
        .stdout(contains("Ada"));

    ff().args(["--db", &db_path, "dashboard", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Ada"))
        .stdout(contains("Streak"));
}

#[test]
fn test_report_degrades_when_storage_is_unreachable() {
    let mut missing = std::env::temp_dir();
    missing.push("focusflow_no_such_dir");
    missing.push("nested");
    missing.push("db.sqlite");
    let db_path = missing.to_string_lossy().to_string();

    ff().args(["--db", &db_path, "report", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Stats are unavailable"));

    ff().args(["--db", &db_path, "dashboard", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(contains("Stats are unavailable"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "checkin", "--date", "2024-01-02"])
        .assert()
        .success();
    ff().args(["--db", &db_path, "focus", "log", "--minutes", "45", "--start", "2024-01-02 10:00"])
        .assert()
        .success();

    let csv_out = temp_out("cli_export", "csv");
    ff().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range",
        "2024-01-01:2024-01-03", "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("date,weekday,checked_in,focus_minutes"));
    assert!(lines[2].starts_with("2024-01-02,Tuesday,true,45,0h 45m"));

    let json_out = temp_out("cli_export", "json");
    ff().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--range",
        "2024-01-02", "--force",
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read exported json"))
            .expect("valid json");
    let days = json.as_array().expect("array of days");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["checked_in"], true);
    assert_eq!(days[0]["focus_minutes"], 45);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_user(&db_path);

    ff().args(["--db", &db_path, "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
