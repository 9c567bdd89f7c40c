use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/services/:id/available-slots",
            get(handlers::slots::list_available_slots),
        )
        .route(
            "/api/services/:id/slots",
            get(handlers::slots::list_day_slots),
        )
}
