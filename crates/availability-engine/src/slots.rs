//! Carve bookable appointment slots out of a weekly schedule.
//!
//! Each day's ranges are merged first, then walked with a cursor that emits
//! back-to-back slots of a fixed length. A tail shorter than one slot is left
//! unbooked.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::day::DayCode;
use crate::error::{AvailabilityError, Result};
use crate::overlap::merge_day;
use crate::schedule::WeeklyAvailability;

pub const MIN_SLOT_MINUTES: u32 = 5;
pub const MAX_SLOT_MINUTES: u32 = 480;

/// A single bookable consultation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub day: DayCode,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Split every day's availability into `slot_minutes`-long slots.
///
/// Slots come out in day-entry order, then by start time within a day.
///
/// # Errors
/// Returns `AvailabilityError::InvalidSlotLength` if `slot_minutes` is outside
/// `MIN_SLOT_MINUTES..=MAX_SLOT_MINUTES`.
pub fn appointment_slots(
    week: &WeeklyAvailability,
    slot_minutes: u32,
) -> Result<Vec<AppointmentSlot>> {
    if !(MIN_SLOT_MINUTES..=MAX_SLOT_MINUTES).contains(&slot_minutes) {
        return Err(AvailabilityError::InvalidSlotLength(slot_minutes));
    }
    let length = i64::from(slot_minutes);

    let mut slots = Vec::new();
    for day in week {
        for range in merge_day(day) {
            let range_end = range.end().minutes_since_midnight();
            let mut cursor = range.start();

            while cursor.minutes_since_midnight() + length <= range_end {
                let end = cursor.plus_minutes(length);
                slots.push(AppointmentSlot {
                    day: day.day,
                    start: cursor,
                    end,
                });
                cursor = end;
            }
        }
    }

    Ok(slots)
}
