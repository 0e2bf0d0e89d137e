use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Guest, NewGuest, NewStaff, NewVolunteer, PersonKind, Staff, Volunteer, WorkArea,
};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct Tables {
    volunteers: Vec<Volunteer>,
    guests: Vec<Guest>,
    staff: Vec<Staff>,
    // last id handed out per kind; never decremented
    volunteer_seq: i64,
    guest_seq: i64,
    staff_seq: i64,
}

/// In-process store for tests and throwaway sessions. Nothing survives the
/// process.
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                volunteers: Vec::new(),
                guests: Vec::new(),
                staff: Vec::new(),
                volunteer_seq: 0,
                guest_seq: 0,
                staff_seq: 0,
            }),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))
    }
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: i64, id_of: impl Fn(&T) -> i64) -> bool {
    match rows.iter().position(|r| id_of(r) == id) {
        Some(idx) => {
            rows.remove(idx);
            true
        }
        None => false,
    }
}

impl RecordStore for MemoryStore {
    fn create_volunteer(&self, input: NewVolunteer) -> AppResult<Volunteer> {
        let mut t = self.lock()?;
        t.volunteer_seq += 1;
        let record = input.into_record(t.volunteer_seq);
        t.volunteers.push(record.clone());
        Ok(record)
    }

    fn get_volunteers(&self) -> AppResult<Vec<Volunteer>> {
        Ok(self.lock()?.volunteers.clone())
    }

    fn get_volunteers_by_category(&self, area: &str) -> AppResult<Vec<Volunteer>> {
        let Some(area) = WorkArea::from_input(area) else {
            return Ok(Vec::new());
        };
        Ok(self
            .lock()?
            .volunteers
            .iter()
            .filter(|v| v.area == area)
            .cloned()
            .collect())
    }

    fn create_guest(&self, input: NewGuest) -> AppResult<Guest> {
        let mut t = self.lock()?;
        t.guest_seq += 1;
        let record = input.into_record(t.guest_seq);
        t.guests.push(record.clone());
        Ok(record)
    }

    fn get_guests(&self) -> AppResult<Vec<Guest>> {
        Ok(self.lock()?.guests.clone())
    }

    fn create_staff(&self, input: NewStaff) -> AppResult<Staff> {
        let mut t = self.lock()?;
        t.staff_seq += 1;
        let record = input.into_record(t.staff_seq);
        t.staff.push(record.clone());
        Ok(record)
    }

    fn get_staff(&self) -> AppResult<Vec<Staff>> {
        Ok(self.lock()?.staff.clone())
    }

    fn delete_person(&self, kind: PersonKind, id: i64) -> AppResult<bool> {
        let mut t = self.lock()?;
        let removed = match kind {
            PersonKind::Volunteer => remove_by_id(&mut t.volunteers, id, |v| v.id),
            PersonKind::Guest => remove_by_id(&mut t.guests, id, |g| g.id),
            PersonKind::Staff => remove_by_id(&mut t.staff, id, |s| s.id),
        };
        Ok(removed)
    }
}
