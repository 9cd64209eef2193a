pub mod checkin;
pub mod focus_session;
pub mod task;
pub mod task_status;
pub mod user;
