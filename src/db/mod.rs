//! Record storage: one capability, two interchangeable backends.

pub mod info;
pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::{Guest, NewGuest, NewStaff, NewVolunteer, PersonKind, Staff, Volunteer};
use std::sync::Arc;

/// Create/get/delete per record kind. Every call is one atomic unit
/// against the backing store. Identities are assigned per kind, strictly
/// increasing, and never handed out twice.
pub trait RecordStore: Send + Sync {
    fn create_volunteer(&self, input: NewVolunteer) -> AppResult<Volunteer>;
    fn get_volunteers(&self) -> AppResult<Vec<Volunteer>>;
    /// Volunteers working in `area`. The argument is read the way check-in
    /// input is ("Gift Shop" and "gift-shop" name the same area); an
    /// unknown area matches nothing.
    fn get_volunteers_by_category(&self, area: &str) -> AppResult<Vec<Volunteer>>;

    fn create_guest(&self, input: NewGuest) -> AppResult<Guest>;
    fn get_guests(&self) -> AppResult<Vec<Guest>>;

    fn create_staff(&self, input: NewStaff) -> AppResult<Staff>;
    fn get_staff(&self) -> AppResult<Vec<Staff>>;

    /// Hard delete of `id` in the table of `kind` only. Returns whether a
    /// row was removed.
    fn delete_person(&self, kind: PersonKind, id: i64) -> AppResult<bool>;
}

/// Build the backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match cfg.backend {
        Backend::Sqlite => Arc::new(SqliteStore::open(&cfg.database_path())?),
        Backend::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::debug!(backend = ?cfg.backend, "record store opened");
    Ok(store)
}
