//! Native tests for the JSON-level functions behind the WASM exports.

use availability_wasm::{
    appointment_slots_json, find_overlaps_json, localize_day_text, render_week_text,
    summarize_week_json,
};
use serde_json::Value;

const WEEK: &str = r#"[
    {"day":"Mon","ranges":[{"start":"08:30","end":"12:00"},{"start":"13:30","end":"17:00"}]},
    {"day":"Tue","ranges":[{"start":"09:00","end":"12:30"}]},
    {"day":"Thu","ranges":[{"start":"14:00","end":"17:30"}]}
]"#;

#[test]
fn summary_uses_camel_case_keys() {
    let json = summarize_week_json(WEEK, None).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["hours"], 14);
    assert_eq!(value["minutes"], 0);
    assert_eq!(value["activeDayCount"], 3);
    assert_eq!(value["localizedDays"][0], "Lundi");
}

#[test]
fn empty_locale_falls_back_to_french() {
    let json = summarize_week_json(WEEK, Some("")).unwrap();
    assert!(json.contains("Mardi"));

    let json = summarize_week_json(WEEK, Some("en")).unwrap();
    assert!(json.contains("Tuesday"));
}

#[test]
fn unknown_locale_is_an_error() {
    let err = summarize_week_json(WEEK, Some("es")).unwrap_err();
    assert!(err.contains("Unknown locale"));
}

#[test]
fn render_text_matches_card() {
    assert_eq!(
        render_week_text(WEEK, Some("fr")).unwrap(),
        "Lundi, Mardi, Jeudi · 14h · 3 jours"
    );
}

#[test]
fn invalid_week_surfaces_engine_message() {
    let err = summarize_week_json(
        r#"[{"day":"Mon","ranges":[{"start":"10:00","end":"09:00"}]}]"#,
        None,
    )
    .unwrap_err();
    assert!(err.contains("not after start"));
}

#[test]
fn overlaps_are_listed() {
    let json = find_overlaps_json(
        r#"[{"day":"Wed","ranges":[{"start":"09:00","end":"11:00"},{"start":"10:30","end":"12:00"}]}]"#,
    )
    .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["day"], "Wed");
    assert_eq!(value[0]["overlapMinutes"], 30);
    assert_eq!(value[0]["rangeB"]["start"], "10:30");
}

#[test]
fn slots_are_listed() {
    let json = appointment_slots_json(
        r#"[{"day":"Fri","ranges":[{"start":"09:00","end":"10:00"}]}]"#,
        30,
    )
    .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["start"], "09:30");
    assert_eq!(value[1]["end"], "10:00");

    assert!(appointment_slots_json(WEEK, 1).is_err());
}

#[test]
fn localize_day_maps_known_and_echoes_unknown() {
    assert_eq!(localize_day_text("Thu", None).unwrap(), "Jeudi");
    assert_eq!(localize_day_text("Thu", Some("en")).unwrap(), "Thursday");
    assert_eq!(localize_day_text("Holiday", Some("fr")).unwrap(), "Holiday");
    assert!(localize_day_text("Thu", Some("es")).is_err());
}

#[test]
fn invalid_time_surfaces_engine_message() {
    let err = summarize_week_json(
        r#"[{"day":"Mon","ranges":[{"start":"25:99","end":"26:00"}]}]"#,
        None,
    )
    .unwrap_err();
    assert!(err.starts_with("Invalid time format: '25:99'"));
}
