use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timezone: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<Arc<ApiState>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timezone: state.timezone.name().to_string(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
