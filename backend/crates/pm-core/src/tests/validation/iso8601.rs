use crate::parse_iso8601;

use chrono::{TimeZone, Utc};

#[test]
fn test_rfc3339_with_zulu_offset() {
    let parsed = parse_iso8601("2025-03-01T00:00:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_rfc3339_with_numeric_offset_is_converted_to_utc() {
    let parsed = parse_iso8601("2025-03-01T09:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap());
}

#[test]
fn test_rfc3339_with_fractional_seconds() {
    let parsed = parse_iso8601("2025-03-01T09:30:00.250Z").unwrap();
    assert_eq!(parsed.timestamp_subsec_millis(), 250);
}

#[test]
fn test_date_time_without_offset_is_utc() {
    let parsed = parse_iso8601("2025-03-01T09:30:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());

    let parsed = parse_iso8601("2025-03-01T09:30").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
}

#[test]
fn test_calendar_date_is_midnight_utc() {
    let parsed = parse_iso8601("2025-03-01").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_out_of_range_components_rejected() {
    assert!(parse_iso8601("2024-13-40").is_none());
    assert!(parse_iso8601("2024-02-30").is_none());
    assert!(parse_iso8601("2025-03-01T25:00:00Z").is_none());
}

#[test]
fn test_non_iso_text_rejected() {
    assert!(parse_iso8601("").is_none());
    assert!(parse_iso8601("tomorrow").is_none());
    assert!(parse_iso8601("03/01/2025").is_none());
    assert!(parse_iso8601("2025-3-1").is_none());
    assert!(parse_iso8601(" 2025-03-01").is_none());
    assert!(parse_iso8601("2025-03-01 ").is_none());
    assert!(parse_iso8601("2025-03-01T").is_none());
}

#[test]
fn test_leap_day() {
    assert!(parse_iso8601("2024-02-29").is_some());
    assert!(parse_iso8601("2023-02-29").is_none());
}

#[test]
fn test_time_fields_must_be_two_digits() {
    assert!(parse_iso8601("2025-03-01T9:30").is_none());
    assert!(parse_iso8601("2025-03-01T9:30:00").is_none());
    assert!(parse_iso8601("2025-03-01T09:3").is_none());
    assert!(parse_iso8601("2025-03-01T9:3:5").is_none());
    assert!(parse_iso8601("2025-03-01T09:30:5Z").is_none());
    assert!(parse_iso8601("2025-03-01T 9:30").is_none());
}

#[test]
fn test_separator_and_designators_are_uppercase_t_and_z() {
    assert!(parse_iso8601("2025-03-01 09:30:00Z").is_none());
    assert!(parse_iso8601("2025-03-01 09:30:00").is_none());
    assert!(parse_iso8601("2025-03-01t09:30:00z").is_none());
    assert!(parse_iso8601("2025-03-01T09:30:00z").is_none());
}

#[test]
fn test_malformed_fraction_and_offset_rejected() {
    assert!(parse_iso8601("2025-03-01T09:30:00.Z").is_none());
    assert!(parse_iso8601("2025-03-01T09:30.5").is_none());
    assert!(parse_iso8601("2025-03-01T09:30:00+2:00").is_none());
    assert!(parse_iso8601("2025-03-01T09:30:00+0200").is_none());
    assert!(parse_iso8601("2025-03-01T09:30:00Z ").is_none());
}

#[test]
fn test_fractional_seconds_without_offset() {
    let parsed = parse_iso8601("2025-03-01T09:30:00.5").unwrap();
    assert_eq!(parsed.timestamp_subsec_millis(), 500);
}
