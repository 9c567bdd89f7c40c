//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way: `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketplace_core::errors::MarketError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use marketplace_api::middleware::error_handling::AppError;
/// use marketplace_core::errors::MarketError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(MarketError::NotFound("service".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub MarketError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MarketError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketError::Conflict(_) => StatusCode::CONFLICT,
            MarketError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MarketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `MarketResult` inside handlers.
impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        AppError(err)
    }
}

/// Wraps bare storage reports as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MarketError::Database(err))
    }
}

/// Maps a MarketError straight to an HTTP response
pub fn map_error(err: MarketError) -> Response {
    AppError(err).into_response()
}
