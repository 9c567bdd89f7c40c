use axum::{extract::State, http::StatusCode, Json};
use marketplace_core::{
    availability,
    models::booking::{Booking, NewBooking},
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Creates a confirmed booking after re-validating it against the provider's
/// hours and existing confirmed bookings.
///
/// Responds `201 Created` with the booking, `400` when the window is not
/// bookable and `409` when it overlaps another booking.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = availability::book_slot(state.store.as_ref(), payload, state.today()).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
