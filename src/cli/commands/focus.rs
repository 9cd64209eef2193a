use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, FocusAction};
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::{AppError, AppResult};
use crate::models::focus_session::FocusTime;
use crate::ui::messages::success;
use crate::utils::time;
use chrono::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Focus {
        action:
            FocusAction::Log {
                minutes,
                task,
                start,
                open,
            },
    } = cmd
    {
        if *minutes <= 0 {
            return Err(AppError::InvalidDuration(*minutes));
        }

        // default: the session just ended now
        let start = match time::parse_optional_timestamp(start.as_ref())? {
            Some(ts) => ts,
            None => Duration::try_minutes(*minutes)
                .and_then(|d| time::now().checked_sub_signed(d))
                .ok_or(AppError::InvalidDuration(*minutes))?,
        };

        let pool = open_pool(cfg)?;
        let id = RecordLogic::log_focus_session(
            &pool.conn,
            cfg.default_user,
            *task,
            *minutes,
            start,
            *open,
        )?;

        let state = if *open { " (open)" } else { "" };
        success(format!(
            "Focus session {id} recorded: {}{state}, started {}",
            FocusTime::from_minutes(*minutes),
            time::to_db(start)
        ));
    }
    Ok(())
}
