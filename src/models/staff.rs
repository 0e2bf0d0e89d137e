use super::input::{optional, required};
use crate::errors::{AppResult, ValidationErrors};
use serde::{Deserialize, Serialize};

/// One staff clock event. A clock-in and the matching clock-out are two
/// independent rows; neither is ever updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInput {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStaff {
    pub name: String,
    pub date: String,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub notes: Option<String>,
}

impl StaffInput {
    pub fn validate(self) -> AppResult<NewStaff> {
        let mut errs = ValidationErrors::new();

        let name = required(&mut errs, "name", self.name);
        let date = required(&mut errs, "date", self.date);

        match (name, date) {
            (Some(name), Some(date)) if errs.is_empty() => Ok(NewStaff {
                name,
                date,
                time_in: optional(self.time_in),
                time_out: optional(self.time_out),
                notes: optional(self.notes),
            }),
            _ => Err(errs.into()),
        }
    }
}

impl NewStaff {
    pub fn into_record(self, id: i64) -> Staff {
        Staff {
            id,
            name: self.name,
            date: self.date,
            time_in: self.time_in,
            time_out: self.time_out,
            notes: self.notes,
        }
    }
}
