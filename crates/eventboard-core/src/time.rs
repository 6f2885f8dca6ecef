//! Date parsing and end-of-day normalization.
//!
//! Source tables carry dates as free text. This module accepts a fixed set of
//! year-first layouts and never guesses at locale-dependent ones:
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DD HH:MM`
//! - `YYYY-MM-DD HH:MM:SS`
//!
//! The date and time may be separated by a space or a `T`, and the date part
//! may use `/` or `.` instead of `-`. Anything else is rejected with `None`.
//!
//! An end date without a time of day (or with an explicit midnight) means
//! "due by the end of that day", so [`normalize_end`] moves it to `23:59:59`
//! on the same calendar date.
//!
//! All timestamps are naive wall-clock values. The dashboard page interprets
//! them in the viewer's local time zone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Layout used whenever a timestamp is handed to the page script.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parses a raw date or date-time string.
///
/// A bare date parses as midnight. Leading and trailing whitespace is ignored.
/// Returns `None` for empty input or any layout outside the accepted set.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (date_part, time_part) = match trimmed.find(|c: char| c == ' ' || c == 'T') {
        Some(idx) => (&trimmed[..idx], Some(trimmed[idx + 1..].trim_start())),
        None => (trimmed, None),
    };

    let date = parse_date(date_part)?;
    let time = match time_part {
        Some(t) => parse_time(t)?,
        None => NaiveTime::MIN,
    };

    Some(date.and_time(time))
}

/// Normalizes a raw end date into the moment the event is over.
///
/// - empty or unparseable input yields `None`
/// - a result at exactly `00:00:00` becomes `23:59:59` on the same date
/// - any other time of day is kept unchanged
pub fn normalize_end(raw: &str) -> Option<NaiveDateTime> {
    let parsed = parse_timestamp(raw)?;
    if parsed.time() == NaiveTime::MIN {
        parsed.date().and_hms_opt(23, 59, 59)
    } else {
        Some(parsed)
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_iso(ts: &NaiveDateTime) -> String {
    ts.format(ISO_FORMAT).to_string()
}

/// Milliseconds from `now` until `end` (negative once `end` has passed).
pub fn millis_until(end: &NaiveDateTime, now: &NaiveDateTime) -> i64 {
    (*end - *now).num_milliseconds()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}
