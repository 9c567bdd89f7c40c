/// Booking creation
pub mod booking;
/// Slot listings
pub mod slots;
