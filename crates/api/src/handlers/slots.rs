//! # Slot Handlers
//!
//! Public listings of bookable slots for a service. Both endpoints are thin
//! wrappers around the availability engine; all scheduling rules live there.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use marketplace_core::{availability, models::slot::SlotResponse};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the single-day listing
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Lists open slots for a service over the rolling booking window
///
/// # Endpoint
///
/// ```text
/// GET /api/services/:id/available-slots
/// ```
///
/// Slots are one hour long regardless of the service's own duration, start
/// no earlier than the provider's next working day and exclude anything
/// overlapping a confirmed booking. An empty array means the provider has no
/// schedule or no free time in the window.
///
/// # Errors
///
/// * `MarketError::NotFound` - Unknown or inactive service
/// * `MarketError::Database` - Any storage failure; no partial result is returned
#[axum::debug_handler]
pub async fn list_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let today = state.today();
    tracing::debug!("Listing available slots for service {} as of {}", service_id, today);

    let slots = availability::list_available_slots(
        state.store.as_ref(),
        service_id,
        today,
        &state.policy,
    )
    .await?;

    Ok(Json(slots.into_iter().map(SlotResponse::from).collect()))
}

/// Lists every slot of one date, booked ones flagged `disponible: false`
///
/// # Endpoint
///
/// ```text
/// GET /api/services/:id/slots?date=2026-10-19
/// ```
///
/// Uses the service's configured duration as slot length.
#[axum::debug_handler]
pub async fn list_day_slots(
    State(state): State<Arc<ApiState>>,
    Path(service_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let slots =
        availability::day_slots(state.store.as_ref(), service_id, query.date, state.today())
            .await?;

    Ok(Json(slots.into_iter().map(SlotResponse::from).collect()))
}
