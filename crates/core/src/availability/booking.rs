use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use super::{
    generator::truncate_to_minute,
    orchestrator::active_service,
    resolver::{index_by_date, resolve_hours},
    weekly::WeeklySchedule,
};
use crate::{
    errors::{MarketError, MarketResult},
    models::{
        booking::{Booking, BookingInsert, NewBooking},
        schedule::OpenHours,
    },
    store::MarketStore,
};

/// Validates and records a confirmed booking.
///
/// The requested interval must lie on a date after `today` and within that
/// date's effective hours. Overlap with existing confirmed bookings is checked
/// by the store inside the same transaction as the insert, so two concurrent
/// requests for the same window cannot both succeed.
pub async fn book_slot(
    store: &dyn MarketStore,
    request: NewBooking,
    today: NaiveDate,
) -> MarketResult<Booking> {
    let request = NewBooking {
        start_time: truncate_to_minute(request.start_time),
        end_time: truncate_to_minute(request.end_time),
        ..request
    };

    if request.end_time <= request.start_time {
        return Err(MarketError::Validation(
            "Booking must end after it starts".to_string(),
        ));
    }
    if request.date <= today {
        return Err(MarketError::Validation(format!(
            "Bookings must be made for a date after {}",
            today
        )));
    }

    let service = active_service(store, request.service_id).await?;
    let weekly = WeeklySchedule::from_rows(store.work_schedules(service.provider_id).await?);
    let hours = if weekly.works_on(request.date.weekday()) {
        let exceptions = store
            .schedule_exceptions(service.provider_id, request.date, request.date)
            .await?;
        let exception = index_by_date(&exceptions).get(&request.date).copied();
        resolve_hours(&weekly, request.date, exception)
    } else {
        None
    };

    let Some(hours) = hours else {
        return Err(MarketError::Validation(format!(
            "Provider is not open on {}",
            request.date
        )));
    };
    let hours = OpenHours::new(truncate_to_minute(hours.start), truncate_to_minute(hours.end));
    if !hours.contains(request.start_time, request.end_time) {
        return Err(MarketError::Validation(format!(
            "Booking {}-{} is outside opening hours {}-{}",
            request.start_time, request.end_time, hours.start, hours.end
        )));
    }

    match store.insert_booking_if_free(request.clone()).await? {
        BookingInsert::Created(booking) => {
            info!(
                "Booked service {} on {} {}-{}",
                booking.service_id, booking.date, booking.start_time, booking.end_time
            );
            Ok(booking)
        }
        BookingInsert::Conflict => {
            warn!(
                "Rejected booking for service {} on {} {}-{}: overlaps a confirmed booking",
                request.service_id, request.date, request.start_time, request.end_time
            );
            Err(MarketError::Conflict(format!(
                "{} {}-{} overlaps an existing booking",
                request.date, request.start_time, request.end_time
            )))
        }
    }
}
