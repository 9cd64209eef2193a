#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use focusflow::core::record::RecordLogic;
use focusflow::db::initialize::init_db;
use focusflow::db::pool::DbPool;
use focusflow::models::task::NewTask;
use focusflow::models::task_status::TaskStatus;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command with HOME pointed at a scratch dir, so no real config is read.
pub fn ff() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("focusflow_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("focusflow");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_focusflow.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `--test init` plus one user (id 1).
pub fn init_db_with_user(db_path: &str) {
    ff().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ff().args(["--db", db_path, "user", "add", "--first", "Ada", "--last", "Lovelace"])
        .assert()
        .success();
}

// ---------------------------
// Library-level fixtures
// ---------------------------

/// Migrated in-memory database.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("run migrations");
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn add_user(conn: &Connection, first: &str) -> i64 {
    RecordLogic::add_user(conn, first, "Tester").expect("add user")
}

pub fn checkin(conn: &Connection, user_id: i64, day: &str) {
    RecordLogic::check_in(conn, user_id, d(day)).expect("check in");
}

/// Task created at `created` ("YYYY-MM-DD HH:MM:SS"), pending.
pub fn task(conn: &Connection, user_id: i64, title: &str, created: &str, due: Option<&str>) -> i64 {
    let t = NewTask {
        title: title.to_string(),
        description: None,
        course: None,
        status: TaskStatus::Pending,
        due_date: due.map(d),
        created_at: ts(created),
    };
    RecordLogic::add_task(conn, user_id, &t).expect("add task")
}

pub fn complete(conn: &Connection, user_id: i64, task_id: i64, at: &str) {
    RecordLogic::set_task_status(conn, user_id, task_id, TaskStatus::Completed, ts(at))
        .expect("complete task");
}

/// Closed session of `minutes` starting at `start`.
pub fn focus(conn: &Connection, user_id: i64, minutes: i64, start: &str) -> i64 {
    RecordLogic::log_focus_session(conn, user_id, None, minutes, ts(start), false)
        .expect("log focus session")
}

pub fn open_focus(conn: &Connection, user_id: i64, minutes: i64, start: &str) -> i64 {
    RecordLogic::log_focus_session(conn, user_id, None, minutes, ts(start), true)
        .expect("log open focus session")
}

/// Raw session row, bypassing validation (zero-minute sessions).
pub fn raw_session(conn: &Connection, user_id: i64, minutes: i64, start: &str, end: Option<&str>) {
    conn.execute(
        "INSERT INTO focus_sessions (user_id, task_id, duration_minutes, start_time, end_time)
         VALUES (?1, NULL, ?2, ?3, ?4)",
        params![user_id, minutes, start, end],
    )
    .expect("insert raw session");
}
