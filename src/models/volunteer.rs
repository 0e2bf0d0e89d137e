use super::input::{optional, required};
use super::work_area::WorkArea;
use crate::errors::{AppResult, ValidationErrors};
use serde::{Deserialize, Serialize};

/// One volunteer check-in. Repeat visits are separate rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub date: String,     // ⇔ volunteers.date (client locale text)
    pub time_in: String,  // ⇔ volunteers.time_in
    pub time_out: Option<String>,
    pub area: WorkArea,   // ⇔ volunteers.area (slug)
    pub activities: String,
}

/// Check-in request as received from a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerInput {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub area: Option<String>,
    pub activities: Option<String>,
}

/// Validated check-in, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVolunteer {
    pub name: String,
    pub date: String,
    pub time_in: String,
    pub time_out: Option<String>,
    pub area: WorkArea,
    pub activities: String,
}

impl VolunteerInput {
    pub fn validate(self) -> AppResult<NewVolunteer> {
        let mut errs = ValidationErrors::new();

        let name = required(&mut errs, "name", self.name);
        let date = required(&mut errs, "date", self.date);
        let time_in = required(&mut errs, "timeIn", self.time_in);
        let activities = required(&mut errs, "activities", self.activities);

        let area = required(&mut errs, "area", self.area).and_then(|raw| {
            let parsed = WorkArea::from_input(&raw);
            if parsed.is_none() {
                errs.push(
                    "area",
                    format!("unknown area '{raw}' (expected one of: {})", WorkArea::slugs()),
                );
            }
            parsed
        });

        match (name, date, time_in, area, activities) {
            (Some(name), Some(date), Some(time_in), Some(area), Some(activities))
                if errs.is_empty() =>
            {
                Ok(NewVolunteer {
                    name,
                    date,
                    time_in,
                    time_out: optional(self.time_out),
                    area,
                    activities,
                })
            }
            _ => Err(errs.into()),
        }
    }
}

impl NewVolunteer {
    pub fn into_record(self, id: i64) -> Volunteer {
        Volunteer {
            id,
            name: self.name,
            date: self.date,
            time_in: self.time_in,
            time_out: self.time_out,
            area: self.area,
            activities: self.activities,
        }
    }
}
