use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RegistryLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_kind};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { kind, id, yes } = cmd {
        let label = format!("{}{}{} #{}", color_for_kind(*kind), kind, RESET, id);

        if !*yes && !ask_confirmation(&format!("Delete {label}? This action is irreversible."))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = db::open(cfg)?;
        if RegistryLogic::delete_person(store.as_ref(), *kind, *id)? {
            success(format!("{label} has been deleted."));
        } else {
            warning(format!("{label} not found, nothing deleted."));
        }
    }

    Ok(())
}
