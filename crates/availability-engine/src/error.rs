//! Error types for availability-engine operations.

use thiserror::Error;

use crate::clock::ClockTime;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// Text that is not `HH:MM` with hour in 0..=23 and minute in 0..=59.
    #[error("Invalid time format: '{0}' (expected HH:MM, 00:00 to 23:59)")]
    InvalidTimeFormat(String),

    /// A range whose end is not strictly after its start.
    #[error("Invalid time range: end {end} is not after start {start}")]
    NegativeDuration { start: ClockTime, end: ClockTime },

    #[error("Unknown day code: '{0}' (expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun)")]
    UnknownDayCode(String),

    #[error("Unknown locale: '{0}' (expected fr or en)")]
    UnknownLocale(String),

    #[error("Invalid slot length: {0} minutes (expected 5 to 480)")]
    InvalidSlotLength(u32),

    #[error("Invalid availability JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
