//! WASM bindings for availability-engine.
//!
//! Exposes weekly summaries, card text, overlap detection and appointment
//! slots to the portal's web front end via `wasm-bindgen`. Weeks cross the
//! boundary as JSON strings in the same array shape the engine parses.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/availability_wasm.wasm
//! ```
//!
//! The `*_json` functions hold the logic and return `Result<String, String>` so
//! they can be tested natively; the `#[wasm_bindgen]` exports only convert the
//! error into a `JsValue`.

use availability_engine::{
    appointment_slots, find_overlaps, localize_day_symbol, render_summary, summarize, Locale,
    WeeklyAvailability,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDto {
    localized_days: Vec<String>,
    hours: i64,
    minutes: i64,
    active_day_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlapDto {
    day: String,
    range_a: RangeDto,
    range_b: RangeDto,
    overlap_minutes: i64,
}

#[derive(Serialize)]
struct RangeDto {
    start: String,
    end: String,
}

#[derive(Serialize)]
struct SlotDto {
    day: String,
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_week(json: &str) -> Result<WeeklyAvailability, String> {
    WeeklyAvailability::from_json(json).map_err(|e| e.to_string())
}

/// Missing or empty locale means the default (French).
fn parse_locale(locale: Option<&str>) -> Result<Locale, String> {
    match locale {
        None | Some("") => Ok(Locale::default()),
        Some(tag) => tag.parse::<Locale>().map_err(|e| e.to_string()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// JSON-level API
// ---------------------------------------------------------------------------

pub fn summarize_week_json(week_json: &str, locale: Option<&str>) -> Result<String, String> {
    let week = parse_week(week_json)?;
    let summary = summarize(&week, parse_locale(locale)?);

    to_json(&SummaryDto {
        localized_days: summary.localized_days,
        hours: summary.hours,
        minutes: summary.minutes,
        active_day_count: summary.active_day_count,
    })
}

pub fn render_week_text(week_json: &str, locale: Option<&str>) -> Result<String, String> {
    let week = parse_week(week_json)?;
    let locale = parse_locale(locale)?;
    Ok(render_summary(&summarize(&week, locale), locale))
}

pub fn find_overlaps_json(week_json: &str) -> Result<String, String> {
    let week = parse_week(week_json)?;

    let dtos: Vec<OverlapDto> = find_overlaps(&week)
        .iter()
        .map(|o| OverlapDto {
            day: o.day.to_string(),
            range_a: RangeDto {
                start: o.range_a.start().to_string(),
                end: o.range_a.end().to_string(),
            },
            range_b: RangeDto {
                start: o.range_b.start().to_string(),
                end: o.range_b.end().to_string(),
            },
            overlap_minutes: o.overlap_minutes,
        })
        .collect();

    to_json(&dtos)
}

pub fn appointment_slots_json(week_json: &str, slot_minutes: u32) -> Result<String, String> {
    let week = parse_week(week_json)?;
    let slots = appointment_slots(&week, slot_minutes).map_err(|e| e.to_string())?;

    let dtos: Vec<SlotDto> = slots
        .iter()
        .map(|s| SlotDto {
            day: s.day.to_string(),
            start: s.start.to_string(),
            end: s.end.to_string(),
        })
        .collect();

    to_json(&dtos)
}

/// Unknown symbols come back unchanged; only a bad locale is an error.
pub fn localize_day_text(symbol: &str, locale: Option<&str>) -> Result<String, String> {
    Ok(localize_day_symbol(symbol, parse_locale(locale)?))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Summarize a week.
///
/// Returns a JSON object `{localizedDays, hours, minutes, activeDayCount}`.
/// `locale` is `"fr"` (default) or `"en"`.
#[wasm_bindgen(js_name = "summarizeWeek")]
pub fn summarize_week(week_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    summarize_week_json(week_json, locale.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// One-line card text, e.g. `"Lundi, Mardi · 7h · 2 jours"`.
#[wasm_bindgen(js_name = "renderWeek")]
pub fn render_week(week_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    render_week_text(week_json, locale.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Overlapping ranges within each day, as a JSON array of
/// `{day, rangeA, rangeB, overlapMinutes}`.
#[wasm_bindgen(js_name = "findOverlaps")]
pub fn find_overlaps_js(week_json: &str) -> Result<String, JsValue> {
    find_overlaps_json(week_json).map_err(|e| JsValue::from_str(&e))
}

/// Bookable slots as a JSON array of `{day, start, end}`.
#[wasm_bindgen(js_name = "appointmentSlots")]
pub fn appointment_slots_js(week_json: &str, slot_minutes: u32) -> Result<String, JsValue> {
    appointment_slots_json(week_json, slot_minutes).map_err(|e| JsValue::from_str(&e))
}

/// Localize a raw day symbol; unknown symbols are returned unchanged.
#[wasm_bindgen(js_name = "localizeDay")]
pub fn localize_day(symbol: &str, locale: Option<String>) -> Result<String, JsValue> {
    localize_day_text(symbol, locale.as_deref()).map_err(|e| JsValue::from_str(&e))
}
