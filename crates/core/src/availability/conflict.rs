use crate::models::{booking::Booking, slot::Slot};

/// Half-open interval intersection: `[a_start, a_end)` and `[b_start, b_end)`
/// overlap iff `a_start < b_end && a_end > b_start`. Touching ends do not.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && a_end > b_start
}

/// Marks every slot that overlaps a confirmed booking of its own date as
/// unavailable. Slots stay in the list; callers drop them later.
pub fn mark_conflicts<'a, I>(slots: &mut [Slot], bookings: I)
where
    I: IntoIterator<Item = &'a Booking>,
{
    for booking in bookings.into_iter().filter(|b| b.is_blocking()) {
        let booked_start = booking.date.and_time(booking.start_time);
        let booked_end = booking.date.and_time(booking.end_time);

        for slot in slots.iter_mut() {
            if slot.date() == booking.date
                && overlaps(slot.start, slot.end, booked_start, booked_end)
            {
                slot.available = false;
            }
        }
    }
}
