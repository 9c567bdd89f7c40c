use axum::http::StatusCode;
use marketplace_api::middleware::error_handling::{map_error, AppError};
use marketplace_core::errors::MarketError;
use rstest::rstest;

#[rstest]
#[case(MarketError::NotFound("Service not found".to_string()), StatusCode::NOT_FOUND)]
#[case(MarketError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(MarketError::Conflict("Already booked".to_string()), StatusCode::CONFLICT)]
#[case(MarketError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    MarketError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: MarketError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_maps_to_internal_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, MarketError::Database(_)));
    assert_eq!(
        axum::response::IntoResponse::into_response(error).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
