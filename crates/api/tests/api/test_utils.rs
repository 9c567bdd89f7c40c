use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveTime, Weekday};
use marketplace_api::{router, ApiState};
use marketplace_core::models::{
    booking::{Booking, BookingStatus},
    schedule::WorkSchedule,
    service::Service,
};
use marketplace_db::mock::repositories::MockStore;
use uuid::Uuid;

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A Saturday; the next working Monday is 2026-10-19.
pub fn today() -> NaiveDate {
    date(2026, 10, 17)
}

pub fn monday() -> NaiveDate {
    date(2026, 10, 19)
}

pub struct TestContext {
    pub store: MockStore,
    pub service: Service,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: MockStore::new(),
            service: Service {
                id: Uuid::new_v4(),
                provider_id: Uuid::new_v4(),
                name: "Bookkeeping session".to_string(),
                duration_minutes: 60,
                active: true,
            },
        }
    }

    pub fn expect_service(&mut self) {
        let service = self.service.clone();
        self.store
            .expect_find_service()
            .returning(move |_| Ok(Some(service.clone())));
    }

    /// Provider works Mondays 11:00-17:00.
    pub fn expect_monday_schedule(&mut self) {
        let provider_id = self.service.provider_id;
        self.store.expect_work_schedules().returning(move |_| {
            Ok(vec![WorkSchedule {
                id: 1,
                provider_id,
                weekday: Weekday::Mon,
                start_time: time(11, 0),
                end_time: time(17, 0),
                active: true,
            }])
        });
    }

    pub fn confirmed_booking(&self, on: NaiveDate, start: NaiveTime, end: NaiveTime) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            service_id: self.service.id,
            date: on,
            start_time: start,
            end_time: end,
            status: BookingStatus::Confirmed,
        }
    }

    // Build a test server over the mock store with a pinned date
    pub fn server(self) -> TestServer {
        let state = ApiState::new(Arc::new(self.store), chrono_tz::UTC).with_today(today());
        TestServer::new(router(Arc::new(state))).expect("Failed to build test server")
    }
}
