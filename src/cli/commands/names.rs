use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RegistryLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Names { kind } = cmd {
        let store = db::open(cfg)?;
        let names = RegistryLogic::unique_names(store.as_ref(), *kind)?;

        if names.is_empty() {
            info(format!("No {} names recorded.", kind));
        }
        for n in names {
            println!("{n}");
        }
    }
    Ok(())
}
