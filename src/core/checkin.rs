use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::models::{Guest, GuestInput, Staff, StaffInput, Volunteer, VolunteerInput};

/// Creation entry points: validate raw input, then insert.
/// Nothing reaches the store unless every field passed.
pub struct CheckinLogic;

impl CheckinLogic {
    pub fn create_volunteer(store: &dyn RecordStore, input: VolunteerInput) -> AppResult<Volunteer> {
        let new = input.validate()?;
        let record = store.create_volunteer(new)?;
        tracing::info!(id = record.id, area = record.area.to_db_str(), "volunteer checked in");
        Ok(record)
    }

    pub fn create_guest(store: &dyn RecordStore, input: GuestInput) -> AppResult<Guest> {
        let new = input.validate()?;
        let record = store.create_guest(new)?;
        tracing::info!(id = record.id, reason = record.reason.to_db_str(), "guest registered");
        Ok(record)
    }

    pub fn create_staff(store: &dyn RecordStore, input: StaffInput) -> AppResult<Staff> {
        let new = input.validate()?;
        let record = store.create_staff(new)?;
        tracing::info!(
            id = record.id,
            clock_in = record.time_in.is_some(),
            clock_out = record.time_out.is_some(),
            "staff entry recorded"
        );
        Ok(record)
    }

    /// Insert a clock-in row. Never touches an existing row.
    pub fn clock_in(
        store: &dyn RecordStore,
        name: String,
        date: String,
        time: String,
        notes: Option<String>,
    ) -> AppResult<Staff> {
        Self::create_staff(
            store,
            StaffInput {
                name: Some(name),
                date: Some(date),
                time_in: Some(time),
                time_out: None,
                notes,
            },
        )
    }

    /// Insert a clock-out row. The matching clock-in stays a separate,
    /// unlinked record.
    pub fn clock_out(
        store: &dyn RecordStore,
        name: String,
        date: String,
        time: String,
        notes: Option<String>,
    ) -> AppResult<Staff> {
        Self::create_staff(
            store,
            StaffInput {
                name: Some(name),
                date: Some(date),
                time_in: None,
                time_out: Some(time),
                notes,
            },
        )
    }
}
