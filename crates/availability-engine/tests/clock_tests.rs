//! Tests for `HH:MM` clock time parsing and the range/day validation boundary.

use availability_engine::{
    minutes_since_midnight, AvailabilityError, ClockTime, DayCode, TimeRange, WeeklyAvailability,
};
use chrono::Weekday;

// ── ClockTime ───────────────────────────────────────────────────────────────

#[test]
fn parses_and_counts_minutes() {
    let t: ClockTime = "08:30".parse().unwrap();
    assert_eq!(t.hour(), 8);
    assert_eq!(t.minute(), 30);
    assert_eq!(minutes_since_midnight(t), 510);
}

#[test]
fn midnight_and_last_minute() {
    assert_eq!("00:00".parse::<ClockTime>().unwrap().minutes_since_midnight(), 0);
    assert_eq!("23:59".parse::<ClockTime>().unwrap().minutes_since_midnight(), 1439);
}

#[test]
fn rejects_malformed_text() {
    for bad in [
        "25:99", "abc", "9:00", "24:00", "12:60", "12-00", "", "12:00:00", "+1:00", " 9:00",
    ] {
        assert!(
            matches!(
                bad.parse::<ClockTime>(),
                Err(AvailabilityError::InvalidTimeFormat(_))
            ),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn displays_zero_padded() {
    assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
}

#[test]
fn new_rejects_out_of_range_components() {
    assert!(ClockTime::new(24, 0).is_err());
    assert!(ClockTime::new(0, 60).is_err());
}

#[test]
fn from_minutes_since_midnight_bounds() {
    assert_eq!(
        ClockTime::from_minutes_since_midnight(0),
        Some(ClockTime::new(0, 0).unwrap())
    );
    assert_eq!(
        ClockTime::from_minutes_since_midnight(1439),
        Some(ClockTime::new(23, 59).unwrap())
    );
    assert_eq!(ClockTime::from_minutes_since_midnight(1440), None);
    assert_eq!(ClockTime::from_minutes_since_midnight(-1), None);
}

// ── TimeRange ───────────────────────────────────────────────────────────────

#[test]
fn range_duration() {
    let r = TimeRange::parse("08:30", "12:00").unwrap();
    assert_eq!(r.duration_minutes(), 210);
}

#[test]
fn reversed_range_is_rejected() {
    let err = TimeRange::parse("10:00", "09:00").unwrap_err();
    assert!(matches!(err, AvailabilityError::NegativeDuration { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid time range: end 09:00 is not after start 10:00"
    );
}

#[test]
fn empty_range_is_rejected() {
    assert!(matches!(
        TimeRange::parse("10:00", "10:00"),
        Err(AvailabilityError::NegativeDuration { .. })
    ));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = TimeRange::parse("09:00", "10:00").unwrap();
    let b = TimeRange::parse("10:00", "11:00").unwrap();
    let c = TimeRange::parse("09:30", "10:30").unwrap();
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}

// ── DayCode ─────────────────────────────────────────────────────────────────

#[test]
fn day_codes_parse_exact_symbols() {
    for code in DayCode::ALL {
        assert_eq!(code.as_str().parse::<DayCode>().unwrap(), code);
    }
    assert!(matches!(
        "Monday".parse::<DayCode>(),
        Err(AvailabilityError::UnknownDayCode(_))
    ));
    assert!("mon".parse::<DayCode>().is_err());
}

#[test]
fn day_codes_convert_with_chrono_weekday() {
    for code in DayCode::ALL {
        let weekday: Weekday = code.into();
        assert_eq!(DayCode::from(weekday), code);
    }
    assert_eq!(DayCode::from(Weekday::Sun), DayCode::Sun);
}

// ── JSON boundary ───────────────────────────────────────────────────────────

#[test]
fn from_json_accepts_valid_week() {
    let week = WeeklyAvailability::from_json(
        r#"[{"day":"Mon","ranges":[{"start":"08:30","end":"12:00"}]},{"day":"Wed"}]"#,
    )
    .unwrap();
    assert_eq!(week.len(), 2);
    assert_eq!(week.days()[0].day, DayCode::Mon);
    assert!(week.days()[1].ranges.is_empty());
}

#[test]
fn from_json_rejects_reversed_range_with_negative_duration() {
    let err = WeeklyAvailability::from_json(
        r#"[{"day":"Mon","ranges":[{"start":"10:00","end":"09:00"}]}]"#,
    )
    .unwrap_err();
    match err {
        AvailabilityError::NegativeDuration { start, end } => {
            assert_eq!(start.to_string(), "10:00");
            assert_eq!(end.to_string(), "09:00");
        }
        other => panic!("expected NegativeDuration, got {other:?}"),
    }
}

#[test]
fn from_json_rejects_bad_time_with_invalid_time_format() {
    let err = WeeklyAvailability::from_json(
        r#"[{"day":"Mon","ranges":[{"start":"25:99","end":"26:00"}]}]"#,
    )
    .unwrap_err();
    assert!(
        matches!(&err, AvailabilityError::InvalidTimeFormat(text) if text == "25:99"),
        "got {err:?}"
    );
}

#[test]
fn from_json_rejects_unknown_day_with_unknown_day_code() {
    let err = WeeklyAvailability::from_json(r#"[{"day":"Funday","ranges":[]}]"#).unwrap_err();
    assert!(
        matches!(&err, AvailabilityError::UnknownDayCode(code) if code == "Funday"),
        "got {err:?}"
    );
}

#[test]
fn from_json_reports_first_failure_in_input_order() {
    let err = WeeklyAvailability::from_json(
        r#"[
            {"day":"Mon","ranges":[{"start":"09:00","end":"10:00"}]},
            {"day":"Tue","ranges":[{"start":"9:00","end":"10:00"}]},
            {"day":"Xyz","ranges":[]}
        ]"#,
    )
    .unwrap_err();
    assert!(matches!(err, AvailabilityError::InvalidTimeFormat(_)), "got {err:?}");
}

#[test]
fn from_json_keeps_json_variant_for_malformed_input() {
    for bad in [
        "not json",
        r#"{"day":"Mon"}"#,
        r#"[{"ranges":[]}]"#,
        r#"[{"day":"Mon","ranges":[{"start":"09:00"}]}]"#,
        r#"[{"day":"Mon","ranges":[{"start":9,"end":10}]}]"#,
    ] {
        let err = WeeklyAvailability::from_json(bad).unwrap_err();
        assert!(matches!(err, AvailabilityError::Json(_)), "'{bad}' gave {err:?}");
    }
}

#[test]
fn serde_deserialize_still_validates() {
    let err = serde_json::from_str::<WeeklyAvailability>(
        r#"[{"day":"Mon","ranges":[{"start":"10:00","end":"09:00"}]}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("not after start"));
}

#[test]
fn json_serialization_uses_wire_shape() {
    let week = WeeklyAvailability::from_json(
        r#"[{"day":"Tue","ranges":[{"start":"09:00","end":"12:30"}]}]"#,
    )
    .unwrap();
    assert_eq!(
        week.to_json().unwrap(),
        r#"[{"day":"Tue","ranges":[{"start":"09:00","end":"12:30"}]}]"#
    );
}
