use axum::http::StatusCode;
use marketplace_core::models::booking::{Booking, BookingInsert, BookingStatus};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{monday, time, TestContext};

fn booking_body(service_id: Uuid, start: &str, end: &str) -> serde_json::Value {
    json!({
        "service_id": service_id,
        "date": "2026-10-19",
        "start_time": start,
        "end_time": end,
    })
}

#[tokio::test]
async fn test_create_booking() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    let created = ctx.confirmed_booking(monday(), time(13, 0), time(14, 0));
    let expected = created.clone();
    ctx.store
        .expect_insert_booking_if_free()
        .withf(|booking| booking.start_time == time(13, 0) && booking.end_time == time(14, 0))
        .times(1)
        .returning(move |_| Ok(BookingInsert::Created(created.clone())));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&booking_body(service_id, "13:00:00", "14:00:00"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let booking: Booking = response.json();
    assert_eq!(booking, expected);
    assert_eq!(booking.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_create_booking_conflict() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    ctx.store
        .expect_insert_booking_if_free()
        .times(1)
        .returning(|_| Ok(BookingInsert::Conflict));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&booking_body(service_id, "13:30:00", "14:30:00"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_booking_outside_hours() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    ctx.store.expect_insert_booking_if_free().times(0);
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&booking_body(service_id, "16:30:00", "17:30:00"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_unknown_service() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_service().returning(|_| Ok(None));
    ctx.store.expect_insert_booking_if_free().times(0);
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&booking_body(Uuid::new_v4(), "13:00:00", "14:00:00"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_booking_missing_fields() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/bookings")
        .json(&json!({ "date": "2026-10-19" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
