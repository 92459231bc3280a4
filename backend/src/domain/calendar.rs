//! Calendar-day helpers. Dates travel as `YYYY-MM-DD` strings end to end.

use chrono::{NaiveDate, Utc};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current UTC calendar day
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).ok()
}

/// The requested day, or today when the query left it out or empty
pub fn day_or_today(requested: Option<String>) -> String {
    requested
        .filter(|date| !date.is_empty())
        .unwrap_or_else(|| format_day(today()))
}
