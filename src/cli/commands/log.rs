use super::open_connection;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let conn = open_connection(cfg, "log")?;
        LogLogic::print_log(&conn)?;
    }

    Ok(())
}
