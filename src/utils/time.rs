//! Time utilities: parsing the free-text times of day the front desk
//! submits ("9:00:00 AM", "17:30") and measuring shifts between them.

use chrono::NaiveTime;

/// Shapes accepted for a time of day, tried in order.
const TIME_FORMATS: [&str; 4] = ["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S", "%H:%M"];

/// Browsers emit U+202F (narrow no-break space) or U+00A0 between the time
/// and the meridiem in some locales.
fn normalize(t: &str) -> String {
    t.replace(['\u{202f}', '\u{a0}'], " ").trim().to_uppercase()
}

pub fn parse_time_of_day(t: &str) -> Option<NaiveTime> {
    let s = normalize(t);
    if s.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&s, fmt).ok())
}

/// Seconds between two times of day on the same reference date, clamped at
/// zero. A clock-out earlier than the clock-in (overnight shift) yields 0,
/// never a wrap past midnight. `None` when either side does not parse.
pub fn shift_seconds(time_in: &str, time_out: &str) -> Option<i64> {
    let start = parse_time_of_day(time_in)?;
    let end = parse_time_of_day(time_out)?;
    Some((end - start).num_seconds().max(0))
}

/// "3:45:12 PM" style rendering of a time of day.
pub fn format_time_of_day(t: NaiveTime) -> String {
    t.format("%-I:%M:%S %p").to_string()
}
