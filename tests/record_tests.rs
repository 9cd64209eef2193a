mod common;
use common::{add_user, d, memory_pool, task, ts};
use focusflow::core::record::RecordLogic;
use focusflow::db::queries::{get_task, load_log};
use focusflow::errors::AppError;
use focusflow::models::task_status::TaskStatus;

#[test]
fn test_second_checkin_same_day_is_rejected() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");

    assert!(RecordLogic::check_in(&pool.conn, user, d("2024-01-05")).unwrap());
    assert!(!RecordLogic::check_in(&pool.conn, user, d("2024-01-05")).unwrap());
    assert!(RecordLogic::check_in(&pool.conn, user, d("2024-01-06")).unwrap());
}

#[test]
fn test_unknown_user_cannot_record() {
    let pool = memory_pool();
    let err = RecordLogic::check_in(&pool.conn, 42, d("2024-01-05")).unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(42)));
}

#[test]
fn test_focus_session_validation() {
    let pool = memory_pool();
    let ada = add_user(&pool.conn, "Ada");
    let bob = add_user(&pool.conn, "Bob");
    let bobs_task = task(&pool.conn, bob, "Bob's task", "2024-01-01 09:00:00", None);
    let start = ts("2024-01-05 09:00:00");

    let err = RecordLogic::log_focus_session(&pool.conn, ada, None, 0, start, false).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(0)));

    let err = RecordLogic::log_focus_session(&pool.conn, ada, Some(bobs_task), 25, start, false)
        .unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(id) if id == bobs_task));

    assert!(RecordLogic::log_focus_session(&pool.conn, bob, Some(bobs_task), 25, start, false).is_ok());
}

#[test]
fn test_focus_session_end_time() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    let start = ts("2024-01-05 23:40:00");

    let closed = RecordLogic::log_focus_session(&pool.conn, user, None, 30, start, false).unwrap();
    let open = RecordLogic::log_focus_session(&pool.conn, user, None, 30, start, true).unwrap();

    let end_of = |id: i64| -> Option<String> {
        pool.conn
            .query_row("SELECT end_time FROM focus_sessions WHERE id = ?1", [id], |r| r.get(0))
            .unwrap()
    };
    assert_eq!(end_of(closed).as_deref(), Some("2024-01-06 00:10:00"));
    assert_eq!(end_of(open), None);
}

#[test]
fn test_task_status_change() {
    let pool = memory_pool();
    let ada = add_user(&pool.conn, "Ada");
    let bob = add_user(&pool.conn, "Bob");
    let t = task(&pool.conn, ada, "Revise notes", "2024-01-01 09:00:00", Some("2024-01-04"));

    RecordLogic::set_task_status(&pool.conn, ada, t, TaskStatus::InProgress, ts("2024-01-02 10:00:00"))
        .unwrap();
    let row = get_task(&pool.conn, ada, t).unwrap().unwrap();
    assert_eq!(row.status, TaskStatus::InProgress);
    assert_eq!(row.updated_at, ts("2024-01-02 10:00:00"));
    assert_eq!(row.due_date, Some(d("2024-01-04")));

    let err = RecordLogic::set_task_status(&pool.conn, bob, t, TaskStatus::Completed, ts("2024-01-03 10:00:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(_)));
    assert!(get_task(&pool.conn, bob, t).unwrap().is_none());
}

#[test]
fn test_status_parsing() {
    assert_eq!(TaskStatus::parse("done").unwrap(), TaskStatus::Completed);
    assert_eq!(TaskStatus::parse("In-Progress").unwrap(), TaskStatus::InProgress);
    assert_eq!(TaskStatus::parse("pending").unwrap(), TaskStatus::Pending);
    assert!(matches!(TaskStatus::parse("archived"), Err(AppError::InvalidStatus(_))));
}

#[test]
fn test_writes_are_journaled() {
    let pool = memory_pool();
    let user = add_user(&pool.conn, "Ada");
    RecordLogic::check_in(&pool.conn, user, d("2024-01-05")).unwrap();
    // duplicate check-in writes nothing
    RecordLogic::check_in(&pool.conn, user, d("2024-01-05")).unwrap();

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["user_add", "checkin"]);
}
