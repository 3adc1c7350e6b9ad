//! Parsing and classification of delivery-date entries
//!
//! Posten reports upcoming delivery days as free-text entries such as
//! "today 5. January", "tomorrow 6. January" or "Monday January 5". The
//! leading token decides the urgency bucket used for color selection, and
//! weekday-style entries can be parsed into a calendar date.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// Errors that can occur when parsing a delivery-date entry
#[derive(Debug, Error)]
pub enum DateParseError {
    /// The entry does not end in the expected `<word> <word> <digits>` pattern
    #[error("No trailing date pattern in '{0}'")]
    PatternNotFound(String),

    /// The trailing pattern did not parse as `Weekday Month Day`
    #[error("Invalid date '{0}': {1}")]
    InvalidDate(String, chrono::ParseError),
}

/// Urgency bucket for a delivery-date entry, used to pick a display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Today,
    Tomorrow,
    Someday,
}

impl Classification {
    /// The lowercase key used in the config color mapping
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Today => "today",
            Classification::Tomorrow => "tomorrow",
            Classification::Someday => "someday",
        }
    }
}

/// Buckets an entry by its leading whitespace-delimited token.
///
/// Exactly `today` or `tomorrow` map to their own bucket; everything else
/// (weekday-based entries, empty strings) is `Someday`.
pub fn classify(entry: &str) -> Classification {
    match entry.split_whitespace().next() {
        Some("today") => Classification::Today,
        Some("tomorrow") => Classification::Tomorrow,
        _ => Classification::Someday,
    }
}

/// Strips a leading `today ` or `tomorrow ` marker, if present.
pub fn strip_relative_marker(entry: &str) -> &str {
    entry
        .strip_prefix("today ")
        .or_else(|| entry.strip_prefix("tomorrow "))
        .unwrap_or(entry)
}

/// Parses the trailing `<weekday> <month> <day>` portion of an entry into a
/// calendar date in the given year.
///
/// The source text carries no year, so the caller supplies one (see
/// [`parse_delivery_date`] for the current-year policy). Parsing is strict:
/// the last three whitespace tokens must be a weekday name, a month name and
/// a day number, in that order.
pub fn parse_delivery_date_in_year(entry: &str, year: i32) -> Result<NaiveDate, DateParseError> {
    let tokens: Vec<&str> = entry.split_whitespace().collect();
    let tail = match tokens.as_slice() {
        [.., weekday, month, day] if day.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            format!("{} {} {}", weekday, month, day.trim_end_matches('.'))
        }
        _ => return Err(DateParseError::PatternNotFound(entry.to_string())),
    };

    let dated = format!("{} {}", tail, year);
    NaiveDate::parse_from_str(&dated, "%A %B %d %Y")
        .map_err(|e| DateParseError::InvalidDate(dated, e))
}

/// Parses an entry assuming the delivery date falls within the current year.
///
/// Known limitation: a December entry parsed in January lands a year off.
pub fn parse_delivery_date(entry: &str) -> Result<NaiveDate, DateParseError> {
    parse_delivery_date_in_year(entry, Local::now().year())
}
