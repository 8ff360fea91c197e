//! Day-of-week codes used as keys in a weekly schedule.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};

/// One of the seven weekday symbols, serialized as `"Mon"` .. `"Sun"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayCode {
    /// All codes in calendar order, Monday first.
    pub const ALL: [DayCode; 7] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
        DayCode::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
            DayCode::Sun => "Sun",
        }
    }
}

impl FromStr for DayCode {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self> {
        DayCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| AvailabilityError::UnknownDayCode(s.to_string()))
    }
}

impl TryFrom<String> for DayCode {
    type Error = AvailabilityError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DayCode> for String {
    fn from(code: DayCode) -> Self {
        code.as_str().to_string()
    }
}

impl From<Weekday> for DayCode {
    fn from(weekday: Weekday) -> Self {
        DayCode::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<DayCode> for Weekday {
    fn from(code: DayCode) -> Self {
        match code {
            DayCode::Mon => Weekday::Mon,
            DayCode::Tue => Weekday::Tue,
            DayCode::Wed => Weekday::Wed,
            DayCode::Thu => Weekday::Thu,
            DayCode::Fri => Weekday::Fri,
            DayCode::Sat => Weekday::Sat,
            DayCode::Sun => Weekday::Sun,
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
