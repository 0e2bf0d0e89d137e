use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckinLogic;
use crate::db;
use crate::errors::AppResult;
use crate::models::GuestInput;
use crate::ui::messages::success;
use crate::utils::date::today_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Guest {
        name,
        email,
        reason,
        phone,
        newsletter,
        bride,
        groom,
        tour_guide,
        date,
    } = cmd
    {
        let input = GuestInput {
            name: Some(name.clone()),
            email: Some(email.clone()),
            phone: phone.clone(),
            reason: Some(reason.clone()),
            join_newsletter: Some(*newsletter),
            bride_name: bride.clone(),
            groom_name: groom.clone(),
            tour_guide: tour_guide.clone(),
            date: Some(date.clone().unwrap_or_else(today_str)),
        };

        let store = db::open(cfg)?;
        let g = CheckinLogic::create_guest(store.as_ref(), input)?;

        success(format!(
            "Guest #{} {} registered ({}, {}).",
            g.id,
            g.name,
            g.reason.to_db_str(),
            g.date
        ));
    }

    Ok(())
}
