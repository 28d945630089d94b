//! # Timestamp Parsing
//!
//! Artifacts carry ISO 8601 timestamps written by many different tools. The
//! accepted forms are:
//!
//! - a calendar date, extended `2024-01-01` or basic `20240101`
//! - a date and time with `T` or a space between them, at hour, minute, or
//!   second precision, with optional fractional seconds; extended
//!   (`10:30:00`) and basic (`103000`) time forms both parse
//! - any date-time above with a `±HH`, `±HHMM`, or `±HH:MM` offset
//!
//! A single trailing `Z` is accepted as the UTC designator. Week dates and
//! ordinal dates are not accepted.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Parse an ISO 8601 timestamp, normalising offsets to UTC.
///
/// Returns `None` when the value matches none of the accepted forms.
pub fn parse_iso8601(value: &str) -> Option<NaiveDateTime> {
    let value = value.strip_suffix('Z').unwrap_or(value);
    let (local, offset_secs) = split_offset(value)?;
    let naive = parse_local(local)?;
    if offset_secs == 0 {
        return Some(naive);
    }
    let offset = FixedOffset::east_opt(offset_secs)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.naive_utc())
}

/// Split a trailing UTC offset off a date-time. Values with no time part
/// never carry an offset, so the `-` separators of a date are left alone.
fn split_offset(value: &str) -> Option<(&str, i32)> {
    let Some(pos) = value.rfind(|c| c == '+' || c == '-') else {
        return Some((value, 0));
    };
    let local = &value[..pos];
    if !local.contains(['T', ' ']) {
        return Some((value, 0));
    }
    let sign = if value[pos..].starts_with('-') { -1 } else { 1 };
    let secs = parse_offset(&value[pos + 1..])?;
    Some((local, sign * secs))
}

fn parse_offset(offset: &str) -> Option<i32> {
    if !offset.is_ascii() {
        return None;
    }
    let (hours, minutes) = match offset.len() {
        2 => (offset, "00"),
        4 => (&offset[..2], &offset[2..]),
        5 if offset.as_bytes()[2] == b':' => (&offset[..2], &offset[3..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60)
}

fn parse_local(value: &str) -> Option<NaiveDateTime> {
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    // Hour precision: chrono will not build a time without minutes.
    if let Some((date, hour)) = value.split_once(['T', ' ']) {
        if hour.len() == 2 && hour.bytes().all(|b| b.is_ascii_digit()) {
            let hour: u32 = hour.parse().ok()?;
            return parse_date(date)?.and_hms_opt(hour, 0, 0);
        }
    }

    parse_date(value)?.and_hms_opt(0, 0, 0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
