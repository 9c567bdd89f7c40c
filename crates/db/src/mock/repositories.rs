use async_trait::async_trait;
use chrono::NaiveDate;
use marketplace_core::{
    models::{
        booking::{Booking, BookingInsert, NewBooking},
        schedule::{ScheduleException, WorkSchedule},
        service::Service,
    },
    store::MarketStore,
};
use mockall::mock;
use uuid::Uuid;

// Mock store for testing
mock! {
    pub Store {}

    #[async_trait]
    impl MarketStore for Store {
        async fn find_service(&self, service_id: Uuid) -> eyre::Result<Option<Service>>;

        async fn work_schedules(&self, provider_id: Uuid) -> eyre::Result<Vec<WorkSchedule>>;

        async fn schedule_exceptions(
            &self,
            provider_id: Uuid,
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<ScheduleException>>;

        async fn confirmed_bookings(
            &self,
            service_id: Uuid,
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<Booking>>;

        async fn insert_booking_if_free(
            &self,
            booking: NewBooking,
        ) -> eyre::Result<BookingInsert>;
    }
}
