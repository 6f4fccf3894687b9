//! ISO-8601 date and date-time parsing for deadlines.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Local date-time layouts, read as UTC. `%.f` also matches no fraction.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 calendar date or date-time into UTC.
///
/// Accepts, in order:
/// - RFC 3339 date-times with an offset (`2025-03-01T00:00:00Z`)
/// - date-times without an offset (`2025-03-01T09:30:00`), taken as UTC
/// - calendar dates (`2025-03-01`), taken as midnight UTC
///
/// Returns `None` for anything else, including out-of-range components, a
/// separator other than `T`, lowercase `t`/`z` and time fields that are not
/// two digits wide.
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    if !has_iso8601_shape(raw.as_bytes()) {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Some(parsed) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, CALENDAR_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// chrono reads `%m`, `%d`, `%H`, `%M` and `%S` with one digit or a leading
/// space, and its RFC 3339 parser allows a space separator and lowercase
/// letters. Check the layout here and leave range checks to chrono:
/// `YYYY-MM-DD`, optionally followed by `THH:MM`, `:SS`, a fraction after the
/// seconds, then `Z` or `+HH:MM`/`-HH:MM`.
fn has_iso8601_shape(bytes: &[u8]) -> bool {
    let Some(rest) = strip_layout(bytes, b"dddd-dd-dd") else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }

    let Some(rest) = strip_layout(rest, b"Tdd:dd") else {
        return false;
    };
    let rest = match strip_layout(rest, b":dd") {
        Some(after_seconds) => strip_fraction(after_seconds),
        None => rest,
    };

    rest.is_empty()
        || rest == b"Z"
        || [b"+dd:dd", b"-dd:dd"]
            .iter()
            .any(|offset| strip_layout(rest, *offset).is_some_and(<[u8]>::is_empty))
}

/// Strip `layout` from the front of `bytes`, `d` standing for any ASCII digit.
fn strip_layout<'a>(bytes: &'a [u8], layout: &[u8]) -> Option<&'a [u8]> {
    if bytes.len() < layout.len() {
        return None;
    }

    let (head, tail) = bytes.split_at(layout.len());
    head.iter()
        .zip(layout)
        .all(|(byte, expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            _ => byte == expected,
        })
        .then_some(tail)
}

/// Strip `.` plus at least one digit, if present.
fn strip_fraction(bytes: &[u8]) -> &[u8] {
    let Some(after_dot) = bytes.strip_prefix(b".") else {
        return bytes;
    };

    match after_dot.iter().take_while(|byte| byte.is_ascii_digit()).count() {
        0 => bytes,
        digits => &after_dot[digits..],
    }
}
