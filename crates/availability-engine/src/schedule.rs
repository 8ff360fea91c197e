//! The weekly schedule data model and its validation boundary.
//!
//! Validation runs when values are constructed or deserialized, never during
//! aggregation: a [`TimeRange`] always ends strictly after it starts, and a
//! [`WeeklyAvailability`] parsed from JSON only holds valid ranges and day codes.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::day::DayCode;
use crate::error::{AvailabilityError, Result};

/// One interval of availability within a single day (no overnight ranges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

/// Wire shape of a range, times still unchecked text.
#[derive(Deserialize)]
struct RawTimeRange {
    start: String,
    end: String,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = AvailabilityError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::parse(&raw.start, &raw.end)
    }
}

/// Wire shape of a day entry, day code still unchecked text.
#[derive(Deserialize)]
struct RawDayAvailability {
    day: String,
    #[serde(default)]
    ranges: Vec<RawTimeRange>,
}

impl TryFrom<RawDayAvailability> for DayAvailability {
    type Error = AvailabilityError;

    fn try_from(raw: RawDayAvailability) -> Result<Self> {
        let day: DayCode = raw.day.parse()?;
        let ranges = raw
            .ranges
            .into_iter()
            .map(TimeRange::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(DayAvailability::new(day, ranges))
    }
}

impl TimeRange {
    /// # Errors
    /// Returns `AvailabilityError::NegativeDuration` if `end <= start`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if end <= start {
            return Err(AvailabilityError::NegativeDuration { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range the caller already knows is ordered (e.g. a merge of
    /// valid ranges).
    pub(crate) fn from_ordered(start: ClockTime, end: ClockTime) -> Self {
        debug_assert!(start < end, "unordered range {start}-{end}");
        Self { start, end }
    }

    /// Parse both ends from `HH:MM` text, e.g. `TimeRange::parse("08:30", "12:00")`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Length of the range in minutes; always positive.
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Two ranges overlap when `a.start < b.end && b.start < a.end`.
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The ranges offered on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: DayCode,
    /// Not required to be sorted or disjoint.
    #[serde(default)]
    pub ranges: Vec<TimeRange>,
}

impl DayAvailability {
    pub fn new(day: DayCode, ranges: Vec<TimeRange>) -> Self {
        Self { day, ranges }
    }

    /// Sum of the range durations on this day, overlaps counted twice.
    pub fn total_minutes(&self) -> i64 {
        self.ranges.iter().map(TimeRange::duration_minutes).sum()
    }
}

/// A recurring weekly schedule, serialized as a bare JSON array of days.
///
/// Order is preserved as given. At most one entry per day is expected, but
/// duplicates are kept rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability {
    days: Vec<DayAvailability>,
}

impl WeeklyAvailability {
    pub fn new(days: Vec<DayAvailability>) -> Self {
        Self { days }
    }

    /// Parse and validate a week from its JSON array form.
    ///
    /// The JSON is read into unchecked text first, then each day and range is
    /// validated, so the first failure comes back as its own variant.
    ///
    /// # Errors
    /// - `AvailabilityError::Json` if the text is not JSON of the expected shape.
    /// - `AvailabilityError::InvalidTimeFormat` for a time that is not `HH:MM`.
    /// - `AvailabilityError::NegativeDuration` for a range with `end <= start`.
    /// - `AvailabilityError::UnknownDayCode` for a day outside `Mon`..`Sun`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw = serde_json::from_str::<Vec<RawDayAvailability>>(json).inspect_err(|err| {
            tracing::debug!(error = %err, "malformed weekly availability JSON");
        })?;

        let week = raw
            .into_iter()
            .map(DayAvailability::try_from)
            .collect::<Result<WeeklyAvailability>>();
        match &week {
            Ok(week) => tracing::debug!(days = week.len(), "parsed weekly availability"),
            Err(err) => tracing::debug!(error = %err, "rejected weekly availability"),
        }
        week
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn days(&self) -> &[DayAvailability] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayAvailability> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn into_days(self) -> Vec<DayAvailability> {
        self.days
    }
}

impl From<Vec<DayAvailability>> for WeeklyAvailability {
    fn from(days: Vec<DayAvailability>) -> Self {
        Self::new(days)
    }
}

impl FromIterator<DayAvailability> for WeeklyAvailability {
    fn from_iter<I: IntoIterator<Item = DayAvailability>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WeeklyAvailability {
    type Item = &'a DayAvailability;
    type IntoIter = std::slice::Iter<'a, DayAvailability>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
