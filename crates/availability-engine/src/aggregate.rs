//! Weekly availability aggregation.
//!
//! Turns a [`WeeklyAvailability`] into the figures shown on a consultant's
//! availability card: which days they are open, how many hours per week, and
//! on how many days. Pure functions over already-validated input; nothing here
//! can fail.

use serde::{Deserialize, Serialize};

use crate::locale::{localize_day_name, Locale};
use crate::schedule::{DayAvailability, WeeklyAvailability};

/// Aggregated view of one weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Day names in the requested locale, in input order.
    pub localized_days: Vec<String>,
    pub hours: i64,
    /// Remainder after whole hours, in `0..60`.
    pub minutes: i64,
    /// Number of day entries, including days with no ranges.
    pub active_day_count: usize,
}

impl WeeklySummary {
    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

/// Sum of every range's duration across every day.
///
/// Overlapping ranges on the same day are counted once per range; see
/// [`crate::overlap::covered_minutes`] for the deduplicated figure.
pub fn total_minutes(week: &WeeklyAvailability) -> i64 {
    week.iter().map(DayAvailability::total_minutes).sum()
}

/// Summarize a week for display in `locale`.
pub fn summarize(week: &WeeklyAvailability, locale: Locale) -> WeeklySummary {
    let total = total_minutes(week);

    WeeklySummary {
        localized_days: week
            .iter()
            .map(|d| localize_day_name(d.day, locale).to_string())
            .collect(),
        hours: total.div_euclid(60),
        minutes: total.rem_euclid(60),
        active_day_count: week.len(),
    }
}
