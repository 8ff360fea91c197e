//! # availability-engine
//!
//! Weekly availability aggregation for the consultation portal's consultant
//! cards.
//!
//! A consultant publishes a recurring weekly schedule (day → list of `HH:MM`
//! ranges). This crate validates that schedule at the boundary and computes
//! what the card shows: localized day names, total weekly hours and minutes,
//! and the number of days listed.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{summarize, Locale, WeeklyAvailability};
//!
//! let json = r#"[
//!     {"day": "Mon", "ranges": [{"start": "08:30", "end": "12:00"}]},
//!     {"day": "Thu", "ranges": [{"start": "14:00", "end": "17:30"}]}
//! ]"#;
//! let week = WeeklyAvailability::from_json(json).unwrap();
//! let summary = summarize(&week, Locale::French);
//!
//! assert_eq!(summary.localized_days, vec!["Lundi", "Jeudi"]);
//! assert_eq!((summary.hours, summary.minutes), (7, 0));
//! assert_eq!(summary.active_day_count, 2);
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` clock times
//! - [`day`] — the seven day codes
//! - [`schedule`] — `TimeRange`, `DayAvailability`, `WeeklyAvailability`
//! - [`aggregate`] — `total_minutes` and `summarize`
//! - [`locale`] — display locales and day-name tables
//! - [`display`] — card text formatting
//! - [`overlap`] — overlap detection and merged coverage
//! - [`slots`] — appointment slot generation
//! - [`error`] — Error types

pub mod aggregate;
pub mod clock;
pub mod day;
pub mod display;
pub mod error;
pub mod locale;
pub mod overlap;
pub mod schedule;
pub mod slots;

pub use aggregate::{summarize, total_minutes, WeeklySummary};
pub use clock::{minutes_since_midnight, ClockTime};
pub use day::DayCode;
pub use display::{format_day_count, format_duration, render_summary};
pub use error::AvailabilityError;
pub use locale::{localize_day_name, localize_day_symbol, Locale};
pub use overlap::{covered_minutes, find_overlaps, merge_day, RangeOverlap};
pub use schedule::{DayAvailability, TimeRange, WeeklyAvailability};
pub use slots::{appointment_slots, AppointmentSlot};
