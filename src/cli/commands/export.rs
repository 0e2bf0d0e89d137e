use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = db::open(cfg)?;
        ExportLogic::export(store.as_ref(), *format, file, *force)?;
    }
    Ok(())
}
