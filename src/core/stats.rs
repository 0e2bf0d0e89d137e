use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::models::{Staff, Stats};
use crate::utils::time::shift_seconds;

pub struct StatsLogic;

impl StatsLogic {
    pub fn compute(store: &dyn RecordStore) -> AppResult<Stats> {
        Ok(Self::compute_detailed(store)?.0)
    }

    /// Stats plus the unrounded worked seconds, both taken from one read
    /// of the staff rows.
    pub fn compute_detailed(store: &dyn RecordStore) -> AppResult<(Stats, i64)> {
        let volunteers = store.get_volunteers()?.len();
        let guests = store.get_guests()?.len();
        let staff = store.get_staff()?;
        let seconds = worked_seconds(&staff);

        let stats = Stats {
            volunteers,
            guests,
            hours: round_hours(seconds),
        };
        Ok((stats, seconds))
    }
}

/// Worked time of one staff row: only rows carrying both times count.
/// Unparsable times contribute nothing.
pub fn row_seconds(row: &Staff) -> i64 {
    let (Some(time_in), Some(time_out)) = (&row.time_in, &row.time_out) else {
        return 0;
    };

    match shift_seconds(time_in, time_out) {
        Some(secs) => secs,
        None => {
            tracing::debug!(
                id = row.id,
                time_in = %time_in,
                time_out = %time_out,
                "skipping staff row with unparsable time"
            );
            0
        }
    }
}

/// Total worked seconds over all rows.
pub fn worked_seconds(rows: &[Staff]) -> i64 {
    rows.iter().map(row_seconds).sum()
}

/// Seconds → hours, rounded to the nearest whole hour (halves away from zero).
pub fn round_hours(secs: i64) -> i64 {
    (secs as f64 / 3600.0).round() as i64
}
