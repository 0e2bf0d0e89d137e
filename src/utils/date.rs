use crate::utils::time::format_time_of_day;
use chrono::{Local, NaiveDate};

/// "7/22/2025" style date, as the desk's browsers render it.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%-m/%-d/%Y").to_string()
}

pub fn today_str() -> String {
    format_date(Local::now().date_naive())
}

pub fn now_time_str() -> String {
    format_time_of_day(Local::now().time())
}
