use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        action: UserAction::Add { first, last },
    } = cmd
    {
        let pool = open_pool(cfg)?;
        let id = RecordLogic::add_user(&pool.conn, first, last)?;
        success(format!("User {id} created: {} {}", first.trim(), last.trim()));
    }
    Ok(())
}
