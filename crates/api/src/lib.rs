//! # Marketplace API
//!
//! Web server for the services marketplace scheduling endpoints: slot
//! listings for a service and booking creation.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into calls to the availability engine
//! - **Middleware**: Error-to-HTTP mapping
//! - **Config**: Environment-driven settings
//!
//! Storage is reached through a [`MarketStore`] handle held in [`ApiState`];
//! the server wires in the PostgreSQL implementation, tests wire in mocks.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use eyre::Result;
use marketplace_core::{availability::SlotPolicy, store::MarketStore};
use marketplace_db::{DbPool, PgStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Storage handle injected into the availability engine
    pub store: Arc<dyn MarketStore>,
    /// Timezone that decides which calendar date is "today"
    pub timezone: Tz,
    /// Listing window and slot granularity
    pub policy: SlotPolicy,
    today: Option<NaiveDate>,
}

impl ApiState {
    pub fn new(store: Arc<dyn MarketStore>, timezone: Tz) -> Self {
        Self {
            store,
            timezone,
            policy: SlotPolicy::default(),
            today: None,
        }
    }

    /// Pins the calendar date instead of reading the system clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Current date in the marketplace timezone.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| Utc::now().with_timezone(&self.timezone).date_naive())
    }
}

/// Builds the application router with all routes attached to `state`
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot listing endpoints
        .merge(routes::slots::routes())
        // Booking endpoints
        .merge(routes::booking::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, wraps the pool in a [`PgStore`], applies CORS, tracing
/// and timeout layers, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store: Arc<dyn MarketStore> = Arc::new(PgStore::new(db_pool));
    let state = Arc::new(ApiState::new(store, config.timezone));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect::<Vec<HeaderValue>>();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server listening on http://{} (timezone {})",
        addr,
        config.timezone.name()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
