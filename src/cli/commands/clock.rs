use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckinLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{now_time_str, today_str};

/// Staff clock-in / clock-out. Each call stores its own row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::ClockIn {
            name,
            date,
            time,
            notes,
        } => {
            let store = db::open(cfg)?;
            let s = CheckinLogic::clock_in(
                store.as_ref(),
                name.clone(),
                date.clone().unwrap_or_else(today_str),
                time.clone().unwrap_or_else(now_time_str),
                notes.clone(),
            )?;
            success(format!(
                "{} clocked in at {} ({}), row #{}.",
                s.name,
                s.time_in.as_deref().unwrap_or_default(),
                s.date,
                s.id
            ));
        }
        Commands::ClockOut {
            name,
            date,
            time,
            notes,
        } => {
            let store = db::open(cfg)?;
            let s = CheckinLogic::clock_out(
                store.as_ref(),
                name.clone(),
                date.clone().unwrap_or_else(today_str),
                time.clone().unwrap_or_else(now_time_str),
                notes.clone(),
            )?;
            success(format!(
                "{} clocked out at {} ({}), row #{}.",
                s.name,
                s.time_out.as_deref().unwrap_or_default(),
                s.date,
                s.id
            ));
        }
        _ => {}
    }

    Ok(())
}
