use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::task::NewTask;
use crate::models::task_status::TaskStatus;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};
use crate::utils::{date, time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };

    let pool = open_pool(cfg)?;
    let user_id = cfg.default_user;

    match action {
        TaskAction::Add {
            title,
            course,
            description,
            due,
        } => {
            let due_date = due.as_deref().map(date::parse_date).transpose()?;
            let task = NewTask {
                title: title.trim().to_string(),
                description: description.clone(),
                course: course.clone(),
                status: TaskStatus::Pending,
                due_date,
                created_at: time::now(),
            };

            let id = RecordLogic::add_task(&pool.conn, user_id, &task)?;
            success(format!("Task {id} created: {}", task.title));

            if let Some(desc) = &task.description {
                for line in textwrap::wrap(desc, 60) {
                    println!("   {GREY}{line}{RESET}");
                }
            }
        }
        TaskAction::Status { id, status, at } => {
            let status = TaskStatus::parse(status)?;
            let at = time::parse_optional_timestamp(at.as_ref())?.unwrap_or_else(time::now);

            RecordLogic::set_task_status(&pool.conn, user_id, *id, status, at)?;
            success(format!("Task {id} is now {}", status.to_db_str()));
        }
    }

    Ok(())
}
