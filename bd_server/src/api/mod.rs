//! HTTP API for the reservation server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework for HTTP
//! - **Tower**: Middleware for CORS and panic recovery
//! - **ReservationService**: Shared, stateless policy over one table ledger
//!
//! # Modules
//!
//! - [`restaurant`]: Initialize, reserve, cancel and availability handlers
//! - [`request_id`]: Request correlation, access log and HTTP metrics
//! - [`middleware`]: Panic recovery
//! - [`response`]: The JSON envelope every endpoint answers with
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use bd_server::api::{create_router, AppState};
//! use booking_dinner::{InMemoryLedger, ReservationService, RestaurantConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ReservationService::new(
//!     Arc::new(InMemoryLedger::new()),
//!     RestaurantConfig::default(),
//! )?;
//! let app = create_router(AppState::new(service));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod middleware;
pub mod request_id;
pub mod response;
pub mod restaurant;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use booking_dinner::ReservationService;
use serde_json::json;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to the Arc wrapper).
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReservationService>,
}

impl AppState {
    pub fn new(service: ReservationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Endpoint Summary
///
/// ```text
/// GET  /health                 - Health check
/// GET  /api/v1/health          - Health check
/// POST /api/v1/initialize      - Set the table count (once)
/// POST /api/v1/reserve         - Reserve tables for a party
/// POST /api/v1/cancel          - Cancel a reservation
/// GET  /api/v1/tables          - Available tables
/// GET  /api/v1/status          - Ledger totals and active bookings
/// ```
pub fn create_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/health", get(health_check))
        .route("/initialize", post(restaurant::initialize_tables))
        .route("/reserve", post(restaurant::reserve_tables))
        .route("/cancel", post(restaurant::cancel_reservation))
        .route("/tables", get(restaurant::available_tables))
        .route("/status", get(restaurant::status));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/v1/health
/// # {"status":"ok","message":"Server is healthy","version":"0.1.0","timestamp":"..."}
/// ```
async fn health_check() -> impl IntoResponse {
    let response = json!({
        "status": "ok",
        "message": "Server is healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
