use super::sqlite_path;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        yes,
    } = cmd
    {
        let db_path = sqlite_path(cfg, "backup")?;
        BackupLogic::backup(&db_path, file, *compress, *yes)?;
    }

    Ok(())
}
