use axum::http::StatusCode;
use marketplace_core::models::slot::SlotResponse;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::{monday, time, TestContext};

#[tokio::test]
async fn test_available_slots_skip_booked_hour() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));
    let booking = ctx.confirmed_booking(monday(), time(13, 0), time(14, 0));
    ctx.store
        .expect_confirmed_bookings()
        .times(1)
        .returning(move |_, _, _| Ok(vec![booking.clone()]));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/available-slots", service_id))
        .await;

    response.assert_status_ok();
    let slots: Vec<SlotResponse> = response.json();
    let first_monday: Vec<_> = slots
        .iter()
        .filter(|slot| slot.start.date() == monday())
        .map(|slot| slot.start.time())
        .collect();
    assert_eq!(
        first_monday,
        vec![time(11, 0), time(12, 0), time(14, 0), time(15, 0), time(16, 0)]
    );
    assert_eq!(slots.len(), 29);
    assert!(slots.iter().all(|slot| slot.available && slot.service_id == service_id));
}

#[tokio::test]
async fn test_available_slots_wire_format() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    ctx.store
        .expect_confirmed_bookings()
        .returning(|_, _, _| Ok(Vec::new()));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/available-slots", service_id))
        .await;

    let body: Value = response.json();
    let first = &body[0];
    assert_eq!(first["id_servicio"], Value::String(service_id.to_string()));
    assert_eq!(first["fecha_inicio"], "2026-10-19T11:00:00");
    assert_eq!(first["fecha_fin"], "2026-10-19T12:00:00");
    assert_eq!(first["disponible"], true);
    assert_eq!(first["precio_adicional"].as_f64(), Some(0.0));
    assert!(first["observaciones"].is_null());
}

#[tokio::test]
async fn test_available_slots_unknown_service() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_service().returning(|_| Ok(None));
    ctx.store.expect_work_schedules().times(0);
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/available-slots", service_id))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains(&service_id.to_string()));
}

#[tokio::test]
async fn test_available_slots_without_schedule_is_empty() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.store.expect_work_schedules().returning(|_| Ok(Vec::new()));
    ctx.store.expect_schedule_exceptions().times(0);
    ctx.store.expect_confirmed_bookings().times(0);
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/available-slots", service_id))
        .await;

    response.assert_status_ok();
    let slots: Vec<SlotResponse> = response.json();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_available_slots_storage_failure() {
    let mut ctx = TestContext::new();
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    ctx.store
        .expect_confirmed_bookings()
        .returning(|_, _, _| Err(eyre::eyre!("connection refused")));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/available-slots", service_id))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_available_slots_invalid_id() {
    let server = TestContext::new().server();

    let response = server.get("/api/services/not-a-uuid/available-slots").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_day_slots_flag_booked_windows() {
    let mut ctx = TestContext::new();
    ctx.service.duration_minutes = 90;
    ctx.expect_service();
    ctx.expect_monday_schedule();
    ctx.store
        .expect_schedule_exceptions()
        .returning(|_, _, _| Ok(Vec::new()));
    let booking = ctx.confirmed_booking(monday(), time(13, 0), time(14, 0));
    ctx.store
        .expect_confirmed_bookings()
        .returning(move |_, _, _| Ok(vec![booking.clone()]));
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/slots", service_id))
        .add_query_param("date", "2026-10-19")
        .await;

    response.assert_status_ok();
    let slots: Vec<SlotResponse> = response.json();
    let summary: Vec<_> = slots
        .iter()
        .map(|slot| (slot.start.time(), slot.available))
        .collect();
    assert_eq!(
        summary,
        vec![
            (time(11, 0), true),
            (time(12, 30), false),
            (time(14, 0), true),
            (time(15, 30), true),
        ]
    );
}

#[tokio::test]
async fn test_day_slots_reject_today() {
    let ctx = TestContext::new();
    let service_id = ctx.service.id;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/slots", service_id))
        .add_query_param("date", "2026-10-17")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
