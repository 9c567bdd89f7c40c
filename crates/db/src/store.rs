//! PostgreSQL implementation of the engine's storage seam.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use marketplace_core::{
    models::{
        booking::{Booking, BookingInsert, NewBooking},
        schedule::{ScheduleException, WorkSchedule},
        service::Service,
    },
    store::MarketStore,
};
use uuid::Uuid;

use crate::{models::convert_rows, repositories, DbPool};

/// Store backed by a connection pool handed in at construction.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarketStore for PgStore {
    async fn find_service(&self, service_id: Uuid) -> Result<Option<Service>> {
        repositories::service::get_service_by_id(&self.pool, service_id)
            .await?
            .map(Service::try_from)
            .transpose()
    }

    async fn work_schedules(&self, provider_id: Uuid) -> Result<Vec<WorkSchedule>> {
        let rows = repositories::schedule::get_active_work_schedules(&self.pool, provider_id).await?;
        convert_rows(rows)
    }

    async fn schedule_exceptions(
        &self,
        provider_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ScheduleException>> {
        let rows =
            repositories::schedule::get_schedule_exceptions(&self.pool, provider_id, from, to)
                .await?;
        convert_rows(rows)
    }

    async fn confirmed_bookings(
        &self,
        service_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Booking>> {
        let rows =
            repositories::booking::get_confirmed_bookings(&self.pool, service_id, from, to).await?;
        convert_rows(rows)
    }

    async fn insert_booking_if_free(&self, booking: NewBooking) -> Result<BookingInsert> {
        match repositories::booking::insert_booking_if_free(&self.pool, &booking).await? {
            Some(row) => Ok(BookingInsert::Created(Booking::try_from(row)?)),
            None => Ok(BookingInsert::Conflict),
        }
    }
}
