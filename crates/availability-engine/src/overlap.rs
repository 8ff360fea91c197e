//! Detect and merge overlapping ranges within a day.
//!
//! Aggregation deliberately double-counts overlapping ranges. These helpers let
//! callers find the overlaps and compute the deduplicated coverage instead.
//! Adjacent ranges (one ends exactly when the next starts) are NOT overlaps,
//! but they are merged into one continuous range.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::day::DayCode;
use crate::schedule::{DayAvailability, TimeRange, WeeklyAvailability};

/// Two ranges of the same day entry that overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOverlap {
    pub day: DayCode,
    pub range_a: TimeRange,
    pub range_b: TimeRange,
    pub overlap_minutes: i64,
}

/// Find every overlapping pair of ranges, day entry by day entry.
///
/// Pairs are reported once, in the order the ranges appear in the day's list.
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_overlaps(week: &WeeklyAvailability) -> Vec<RangeOverlap> {
    let mut overlaps = Vec::new();

    for day in week {
        for (i, a) in day.ranges.iter().enumerate() {
            for b in &day.ranges[i + 1..] {
                if a.overlaps(b) {
                    let overlap_start = a.start().max(b.start());
                    let overlap_end = a.end().min(b.end());
                    overlaps.push(RangeOverlap {
                        day: day.day,
                        range_a: *a,
                        range_b: *b,
                        overlap_minutes: overlap_end.minutes_since_midnight()
                            - overlap_start.minutes_since_midnight(),
                    });
                }
            }
        }
    }

    overlaps
}

/// Merge a day's overlapping or adjacent ranges.
///
/// Returns a sorted, non-overlapping list of ranges.
pub fn merge_day(day: &DayAvailability) -> Vec<TimeRange> {
    let mut intervals: Vec<(ClockTime, ClockTime)> =
        day.ranges.iter().map(|r| (r.start(), r.end())).collect();

    // Sort by start time (then by end time for stability).
    intervals.sort();

    let mut merged: Vec<(ClockTime, ClockTime)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
        .into_iter()
        .map(|(start, end)| TimeRange::from_ordered(start, end))
        .collect()
}

/// Total minutes covered by the week once overlaps within each day are merged.
///
/// Never exceeds [`crate::aggregate::total_minutes`]; equal to it exactly when
/// [`find_overlaps`] is empty.
pub fn covered_minutes(week: &WeeklyAvailability) -> i64 {
    week.iter()
        .flat_map(merge_day)
        .map(|r| r.duration_minutes())
        .sum()
}
