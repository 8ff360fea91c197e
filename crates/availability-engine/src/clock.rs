//! Wall-clock times of day in strict `HH:MM` form.
//!
//! A [`ClockTime`] can only be built through validation, so every value held by
//! the rest of the crate is a real time between `00:00` and `23:59`.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};

/// A time of day on a 24-hour clock with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build a clock time from hour and minute components.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvalidTimeFormat` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(|| AvailabilityError::InvalidTimeFormat(format!("{hour:02}:{minute:02}")))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since `00:00`, i.e. `hour * 60 + minute`.
    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour() * 60 + self.minute())
    }

    /// Clock time `minutes` after midnight, or `None` past `23:59`.
    pub fn from_minutes_since_midnight(minutes: i64) -> Option<Self> {
        if !(0..24 * 60).contains(&minutes) {
            return None;
        }
        let minutes = minutes as u32;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(ClockTime)
    }

    /// `minutes` later on the same clock; the caller keeps the result before
    /// midnight.
    pub(crate) fn plus_minutes(self, minutes: i64) -> Self {
        let (time, wrapped) = self
            .0
            .overflowing_add_signed(Duration::minutes(minutes));
        debug_assert_eq!(wrapped, 0, "{self} + {minutes}m wraps past midnight");
        ClockTime(time)
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

/// Free-function form of [`ClockTime::minutes_since_midnight`].
pub fn minutes_since_midnight(time: ClockTime) -> i64 {
    time.minutes_since_midnight()
}

impl FromStr for ClockTime {
    type Err = AvailabilityError;

    /// Parse exactly two hour digits, a colon and two minute digits.
    ///
    /// `"9:00"`, `"09:00:00"` and `" 09:00"` are all rejected; chrono's `%H`
    /// would accept some of them, so the shape is checked by hand first.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AvailabilityError::InvalidTimeFormat(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
        let minute = u32::from(digits[2] - b'0') * 10 + u32::from(digits[3] - b'0');
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AvailabilityError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

