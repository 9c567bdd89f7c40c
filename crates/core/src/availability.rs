//! # Availability Engine
//!
//! Computes bookable slots for a service from three read-only inputs:
//!
//! 1. the provider's weekly template ([`weekly`]),
//! 2. date-level exceptions that replace the template for one day ([`resolver`]),
//! 3. the service's confirmed bookings ([`conflict`]).
//!
//! [`generator`] cuts one day's open interval into fixed-length slots and
//! [`orchestrator`] drives all of it across the rolling booking window.
//! [`booking`] re-validates a requested booking against the same rules before
//! it is written.

pub mod booking;
pub mod conflict;
pub mod generator;
pub mod orchestrator;
pub mod resolver;
pub mod weekly;

pub use booking::book_slot;
pub use orchestrator::{
    booking_window, compute_available_slots, day_slots, first_bookable_date,
    list_available_slots, BookingWindow, SlotPolicy,
};
pub use weekly::WeeklySchedule;
