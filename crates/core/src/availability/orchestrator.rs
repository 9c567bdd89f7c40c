//! Drives the engine across the rolling booking window.
//!
//! ## Algorithm
//!
//! 1. Resolve the service and its provider (inactive or unknown: not found)
//! 2. Reduce the provider's weekly rows; no rows at all means no slots
//! 3. Start on the first day after today whose weekday has working hours
//!    (scanning at most a week ahead, tomorrow otherwise) and end
//!    `window_days` later, both inclusive
//! 4. For every date in the window with weekly hours: apply its exception,
//!    cut the open interval into slots and mark booked ones unavailable
//! 5. Keep the available slots whose date is strictly after today

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use super::{
    conflict::mark_conflicts,
    generator::generate_slots,
    resolver::{index_by_date, resolve_hours},
    weekly::WeeklySchedule,
};
use crate::{
    errors::{MarketError, MarketResult},
    models::{
        booking::Booking, schedule::ScheduleException, service::Service, slot::Slot,
    },
    store::MarketStore,
};

/// How far ahead the first bookable date is searched for.
const START_SCAN_DAYS: i64 = 7;

/// Listing policy shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    /// Days after the first bookable date covered by the listing.
    pub window_days: u32,
    /// Slot length of the public listing, independent of the service's own
    /// configured duration.
    pub listing_slot_minutes: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            window_days: 30,
            listing_slot_minutes: 60,
        }
    }
}

/// Inclusive date range a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BookingWindow {
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |date| *date <= self.end)
    }
}

/// First date strictly after `today` whose weekday has weekly hours.
///
/// Only the weekly template is consulted; a date closed by an exception can
/// still be picked. Falls back to tomorrow when no weekday within a week works.
pub fn first_bookable_date(weekly: &WeeklySchedule, today: NaiveDate) -> NaiveDate {
    let tomorrow = today + Duration::days(1);
    (1..=START_SCAN_DAYS)
        .map(|offset| today + Duration::days(offset))
        .find(|date| weekly.works_on(date.weekday()))
        .unwrap_or(tomorrow)
}

pub fn booking_window(
    weekly: &WeeklySchedule,
    today: NaiveDate,
    policy: &SlotPolicy,
) -> BookingWindow {
    let start = first_bookable_date(weekly, today);
    BookingWindow {
        start,
        end: start + Duration::days(i64::from(policy.window_days)),
    }
}

/// Pure core of the listing: available slots for `service_id`, date ordered.
///
/// `exceptions` and `bookings` may cover more than the window; entries outside
/// it are ignored.
pub fn compute_available_slots(
    service_id: Uuid,
    weekly: &WeeklySchedule,
    exceptions: &[ScheduleException],
    bookings: &[Booking],
    today: NaiveDate,
    policy: &SlotPolicy,
) -> Vec<Slot> {
    if weekly.is_empty() {
        return Vec::new();
    }

    let window = booking_window(weekly, today, policy);
    let exceptions = index_by_date(exceptions);
    let mut bookings_by_date: HashMap<NaiveDate, Vec<&Booking>> = HashMap::new();
    for booking in bookings {
        bookings_by_date.entry(booking.date).or_default().push(booking);
    }

    let mut slots = Vec::new();
    for date in window.days() {
        if !weekly.works_on(date.weekday()) {
            continue;
        }

        let exception = exceptions.get(&date).copied();
        let Some(hours) = resolve_hours(weekly, date, exception) else {
            continue;
        };

        let mut day = generate_slots(service_id, date, hours, policy.listing_slot_minutes);
        mark_conflicts(
            &mut day,
            bookings_by_date.get(&date).into_iter().flatten().copied(),
        );
        slots.extend(day);
    }

    slots
        .into_iter()
        .filter(|slot| slot.available)
        .filter(|slot| slot.date() > today)
        .collect()
}

/// Resolves a service that exists and is active.
pub(crate) async fn active_service(
    store: &dyn MarketStore,
    service_id: Uuid,
) -> MarketResult<Service> {
    store
        .find_service(service_id)
        .await?
        .filter(|service| service.active)
        .ok_or_else(|| MarketError::NotFound(format!("Service with ID {} not found", service_id)))
}

/// Request-scoped listing of open slots for a service.
///
/// Performs three ordered reads (schedule, exceptions, bookings) and computes
/// the result in process. A provider without any weekly hours gets an empty
/// list; any storage failure aborts the whole listing.
pub async fn list_available_slots(
    store: &dyn MarketStore,
    service_id: Uuid,
    today: NaiveDate,
    policy: &SlotPolicy,
) -> MarketResult<Vec<Slot>> {
    let service = active_service(store, service_id).await?;

    let weekly = WeeklySchedule::from_rows(store.work_schedules(service.provider_id).await?);
    if weekly.is_empty() {
        debug!(
            "Provider {} has no weekly schedule, no slots for service {}",
            service.provider_id, service.id
        );
        return Ok(Vec::new());
    }

    let window = booking_window(&weekly, today, policy);
    debug!(
        "Listing slots for service {} from {} to {}",
        service.id, window.start, window.end
    );

    let exceptions = store
        .schedule_exceptions(service.provider_id, window.start, window.end)
        .await?;
    let bookings = store
        .confirmed_bookings(service.id, window.start, window.end)
        .await?;

    let slots = compute_available_slots(service.id, &weekly, &exceptions, &bookings, today, policy);
    debug!("Service {} has {} available slots", service.id, slots.len());

    Ok(slots)
}

/// Every slot of one date, booked ones included, cut with the service's own
/// duration.
///
/// Same-day and past dates are rejected.
pub async fn day_slots(
    store: &dyn MarketStore,
    service_id: Uuid,
    date: NaiveDate,
    today: NaiveDate,
) -> MarketResult<Vec<Slot>> {
    if date <= today {
        return Err(MarketError::Validation(format!(
            "Date {} must be after {}",
            date, today
        )));
    }

    let service = active_service(store, service_id).await?;
    let weekly = WeeklySchedule::from_rows(store.work_schedules(service.provider_id).await?);
    if !weekly.works_on(date.weekday()) {
        return Ok(Vec::new());
    }

    let exceptions = store
        .schedule_exceptions(service.provider_id, date, date)
        .await?;
    let exception = index_by_date(&exceptions).get(&date).copied();
    let Some(hours) = resolve_hours(&weekly, date, exception) else {
        return Ok(Vec::new());
    };

    let mut slots = generate_slots(service.id, date, hours, service.duration_minutes);
    let bookings = store.confirmed_bookings(service.id, date, date).await?;
    mark_conflicts(&mut slots, &bookings);

    Ok(slots)
}
