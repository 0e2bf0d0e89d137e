use super::guest_reason::GuestReason;
use super::input::{looks_like_email, optional, required};
use crate::errors::{AppResult, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A registered guest. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: GuestReason,
    pub join_newsletter: bool,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub tour_guide: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub join_newsletter: Option<bool>,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub tour_guide: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: GuestReason,
    pub join_newsletter: bool,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub tour_guide: Option<String>,
    pub date: String,
}

impl GuestInput {
    /// Wedding guests must name the couple; for any other reason the
    /// wedding-only fields are dropped.
    pub fn validate(self) -> AppResult<NewGuest> {
        let mut errs = ValidationErrors::new();

        let name = required(&mut errs, "name", self.name);
        let date = required(&mut errs, "date", self.date);

        let email = required(&mut errs, "email", self.email).filter(|e| {
            let ok = looks_like_email(e);
            if !ok {
                errs.push("email", format!("'{e}' is not a valid email address"));
            }
            ok
        });

        let reason = required(&mut errs, "reason", self.reason).and_then(|raw| {
            let parsed = GuestReason::from_input(&raw);
            if parsed.is_none() {
                errs.push(
                    "reason",
                    format!(
                        "unknown reason '{raw}' (expected one of: {})",
                        GuestReason::slugs()
                    ),
                );
            }
            parsed
        });

        let (bride_name, groom_name, tour_guide) = match reason {
            Some(r) if r.is_wedding() => (
                required(&mut errs, "brideName", self.bride_name),
                required(&mut errs, "groomName", self.groom_name),
                optional(self.tour_guide),
            ),
            _ => (None, None, None),
        };

        match (name, email, reason, date) {
            (Some(name), Some(email), Some(reason), Some(date)) if errs.is_empty() => {
                Ok(NewGuest {
                    name,
                    email,
                    phone: optional(self.phone),
                    reason,
                    join_newsletter: self.join_newsletter.unwrap_or(false),
                    bride_name,
                    groom_name,
                    tour_guide,
                    date,
                })
            }
            _ => Err(errs.into()),
        }
    }
}

impl NewGuest {
    pub fn into_record(self, id: i64) -> Guest {
        Guest {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            reason: self.reason,
            join_newsletter: self.join_newsletter,
            bride_name: self.bride_name,
            groom_name: self.groom_name,
            tour_guide: self.tour_guide,
            date: self.date,
        }
    }
}
