use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckinLogic;
use crate::db;
use crate::errors::AppResult;
use crate::models::VolunteerInput;
use crate::ui::messages::success;
use crate::utils::date::{now_time_str, today_str};

/// Check in a volunteer; date and arrival time default to now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Volunteer {
        name,
        area,
        activities,
        date,
        time_in,
        time_out,
    } = cmd
    {
        let input = VolunteerInput {
            name: Some(name.clone()),
            date: Some(date.clone().unwrap_or_else(today_str)),
            time_in: Some(time_in.clone().unwrap_or_else(now_time_str)),
            time_out: time_out.clone(),
            area: Some(area.clone()),
            activities: Some(activities.clone()),
        };

        let store = db::open(cfg)?;
        let v = CheckinLogic::create_volunteer(store.as_ref(), input)?;

        success(format!(
            "Volunteer #{} {} checked in ({}, {} at {}).",
            v.id,
            v.name,
            v.area.label(),
            v.date,
            v.time_in
        ));
    }

    Ok(())
}
