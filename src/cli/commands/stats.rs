use crate::config::Config;
use crate::core::StatsLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::hours_readable;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = db::open(cfg)?;
    let (stats, exact) = StatsLogic::compute_detailed(store.as_ref())?;

    header("Registry statistics");
    println!("{}• Volunteers:{} {}{}{}", CYAN, RESET, GREEN, stats.volunteers, RESET);
    println!("{}• Guests:{} {}{}{}", CYAN, RESET, GREEN, stats.guests, RESET);
    println!(
        "{}• Staff hours:{} {}{}{} {}({}){}",
        CYAN,
        RESET,
        GREEN,
        stats.hours,
        RESET,
        GREY,
        hours_readable(exact),
        RESET
    );
    Ok(())
}
