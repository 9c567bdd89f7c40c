use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use uuid::Uuid;

use crate::models::{schedule::OpenHours, slot::Slot};

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// Cuts `hours` on `date` into consecutive slots of `slot_minutes`.
///
/// A slot is emitted only if it ends at or before closing time; a trailing
/// remainder shorter than one slot is dropped, never truncated. Every slot
/// starts out available. A zero length or an interval that does not open
/// before it closes yields nothing.
pub fn generate_slots(
    service_id: Uuid,
    date: NaiveDate,
    hours: OpenHours,
    slot_minutes: u32,
) -> Vec<Slot> {
    if slot_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(slot_minutes));
    let open = date.and_time(truncate_to_minute(hours.start));
    let close = date.and_time(truncate_to_minute(hours.end));

    let mut slots = Vec::new();
    let mut cursor = open;
    while cursor + step <= close {
        slots.push(Slot {
            service_id,
            start: cursor,
            end: cursor + step,
            available: true,
        });
        cursor += step;
    }

    slots
}
