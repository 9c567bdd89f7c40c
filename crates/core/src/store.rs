//! Storage seam between the availability engine and whatever holds the data.
//!
//! The engine never opens connections itself; a handle implementing
//! [`MarketStore`] is passed in by the caller for each request.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::models::{
    booking::{Booking, BookingInsert, NewBooking},
    schedule::{ScheduleException, WorkSchedule},
    service::Service,
};

#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Looks up a service regardless of its `active` flag.
    async fn find_service(&self, service_id: Uuid) -> Result<Option<Service>>;

    /// Active weekly rows of a provider. Duplicates per weekday are allowed.
    async fn work_schedules(&self, provider_id: Uuid) -> Result<Vec<WorkSchedule>>;

    /// Exceptions of a provider with `from <= date <= to`.
    async fn schedule_exceptions(
        &self,
        provider_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ScheduleException>>;

    /// Confirmed bookings of a service with `from <= date <= to`.
    async fn confirmed_bookings(
        &self,
        service_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Booking>>;

    /// Atomically re-checks the booking against confirmed bookings of the same
    /// date and inserts it as confirmed when nothing overlaps.
    async fn insert_booking_if_free(&self, booking: NewBooking) -> Result<BookingInsert>;
}
