use serde::Serialize;

/// Dashboard counters.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Volunteer check-in rows (not distinct people).
    pub volunteers: usize,
    /// Guest registration rows.
    pub guests: usize,
    /// Staff hours worked, rounded to the nearest whole hour.
    pub hours: i64,
}
