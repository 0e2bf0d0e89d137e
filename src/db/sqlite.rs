//! SQLite-backed record store.

use super::RecordStore;
use super::initialize::init_db;
use super::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Guest, GuestReason, NewGuest, NewStaff, NewVolunteer, PersonKind, Staff, Volunteer, WorkArea,
};
use chrono::Local;
use rusqlite::{Connection, Row, params};
use std::path::Path;
use std::sync::Mutex;

const VOLUNTEER_COLUMNS: &str = "id, name, date, time_in, time_out, area, activities";
const GUEST_COLUMNS: &str = "id, name, email, phone, reason, join_newsletter, \
                             bride_name, groom_name, tour_guide, date";
const STAFF_COLUMNS: &str = "id, name, date, time_in, time_out, notes";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file and apply pending migrations.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Private database living as long as the store. Used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Helper to execute a closure with the locked connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Storage("database connection lock poisoned".into()))?;
        func(&conn)
    }
}

/// Audit rows are best effort: a failed log write never fails the mutation.
fn audit(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        tracing::warn!(error = %e, operation, target, "failed to write internal log");
    }
}

fn conversion_error(column: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        Box::new(AppError::Storage(msg)),
    )
}

fn map_volunteer(row: &Row) -> rusqlite::Result<Volunteer> {
    let area_str: String = row.get("area")?;
    let area = WorkArea::from_db_str(&area_str)
        .ok_or_else(|| conversion_error(5, format!("Invalid area: {area_str}")))?;

    Ok(Volunteer {
        id: row.get("id")?,
        name: row.get("name")?,
        date: row.get("date")?,
        time_in: row.get("time_in")?,
        time_out: row.get("time_out")?,
        area,
        activities: row.get("activities")?,
    })
}

fn map_guest(row: &Row) -> rusqlite::Result<Guest> {
    let reason_str: String = row.get("reason")?;
    let reason = GuestReason::from_db_str(&reason_str)
        .ok_or_else(|| conversion_error(4, format!("Invalid reason: {reason_str}")))?;

    Ok(Guest {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        reason,
        join_newsletter: row.get::<_, i32>("join_newsletter")? == 1,
        bride_name: row.get("bride_name")?,
        groom_name: row.get("groom_name")?,
        tour_guide: row.get("tour_guide")?,
        date: row.get("date")?,
    })
}

fn map_staff(row: &Row) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get("id")?,
        name: row.get("name")?,
        date: row.get("date")?,
        time_in: row.get("time_in")?,
        time_out: row.get("time_out")?,
        notes: row.get("notes")?,
    })
}

fn load_all<T, P, F>(conn: &Connection, sql: &str, args: P, map: F) -> AppResult<Vec<T>>
where
    P: rusqlite::Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl RecordStore for SqliteStore {
    fn create_volunteer(&self, input: NewVolunteer) -> AppResult<Volunteer> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO volunteers (name, date, time_in, time_out, area, activities, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    input.name,
                    input.date,
                    input.time_in,
                    input.time_out,
                    input.area.to_db_str(),
                    input.activities,
                    Local::now().to_rfc3339(),
                ],
            )?;
            let record = input.into_record(conn.last_insert_rowid());

            audit(
                conn,
                "add",
                &format!("volunteer #{}", record.id),
                &format!("{} checked in ({})", record.name, record.area.label()),
            );
            Ok(record)
        })
    }

    fn get_volunteers(&self) -> AppResult<Vec<Volunteer>> {
        self.with_conn(|conn| {
            load_all(
                conn,
                &format!("SELECT {VOLUNTEER_COLUMNS} FROM volunteers ORDER BY id ASC"),
                [],
                map_volunteer,
            )
        })
    }

    fn get_volunteers_by_category(&self, area: &str) -> AppResult<Vec<Volunteer>> {
        let Some(area) = WorkArea::from_input(area) else {
            return Ok(Vec::new());
        };
        self.with_conn(|conn| {
            load_all(
                conn,
                &format!(
                    "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE area = ?1 ORDER BY id ASC"
                ),
                [area.to_db_str()],
                map_volunteer,
            )
        })
    }

    fn create_guest(&self, input: NewGuest) -> AppResult<Guest> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO guests (name, email, phone, reason, join_newsletter,
                                     bride_name, groom_name, tour_guide, date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    input.name,
                    input.email,
                    input.phone,
                    input.reason.to_db_str(),
                    if input.join_newsletter { 1 } else { 0 },
                    input.bride_name,
                    input.groom_name,
                    input.tour_guide,
                    input.date,
                    Local::now().to_rfc3339(),
                ],
            )?;
            let record = input.into_record(conn.last_insert_rowid());

            audit(
                conn,
                "add",
                &format!("guest #{}", record.id),
                &format!("{} registered ({})", record.name, record.reason.to_db_str()),
            );
            Ok(record)
        })
    }

    fn get_guests(&self) -> AppResult<Vec<Guest>> {
        self.with_conn(|conn| {
            load_all(
                conn,
                &format!("SELECT {GUEST_COLUMNS} FROM guests ORDER BY id ASC"),
                [],
                map_guest,
            )
        })
    }

    fn create_staff(&self, input: NewStaff) -> AppResult<Staff> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO staff (name, date, time_in, time_out, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    input.name,
                    input.date,
                    input.time_in,
                    input.time_out,
                    input.notes,
                    Local::now().to_rfc3339(),
                ],
            )?;
            let record = input.into_record(conn.last_insert_rowid());

            let event = match (&record.time_in, &record.time_out) {
                (Some(t), None) => format!("clocked in at {t}"),
                (None, Some(t)) => format!("clocked out at {t}"),
                (Some(i), Some(o)) => format!("worked {i} - {o}"),
                (None, None) => "entry without times".to_string(),
            };
            audit(
                conn,
                "add",
                &format!("staff #{}", record.id),
                &format!("{} {}", record.name, event),
            );
            Ok(record)
        })
    }

    fn get_staff(&self) -> AppResult<Vec<Staff>> {
        self.with_conn(|conn| {
            load_all(
                conn,
                &format!("SELECT {STAFF_COLUMNS} FROM staff ORDER BY id ASC"),
                [],
                map_staff,
            )
        })
    }

    fn delete_person(&self, kind: PersonKind, id: i64) -> AppResult<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                &format!("DELETE FROM {} WHERE id = ?1", kind.table()),
                [id],
            )?;

            if affected > 0 {
                audit(
                    conn,
                    "del",
                    &format!("{kind} #{id}"),
                    &format!("Deleted {kind} record {id}"),
                );
            }
            Ok(affected > 0)
        })
    }
}
