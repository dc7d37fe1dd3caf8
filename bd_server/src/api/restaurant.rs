//! Restaurant table API handlers.
//!
//! This module provides HTTP REST endpoints for table reservations:
//! - Initializing the restaurant's table count (once)
//! - Reserving tables for a party
//! - Cancelling a reservation by booking ID
//! - Reading current availability
//!
//! # Examples
//!
//! Initialize:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/initialize \
//!   -H "Content-Type: application/json" \
//!   -d '{"tables": 10}'
//! ```
//!
//! Reserve:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/reserve \
//!   -H "Content-Type: application/json" \
//!   -d '{"customers": 3}'
//! ```

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use booking_dinner::{LedgerSnapshot, ReservationError};
use serde::{Deserialize, Serialize};

use super::{
    AppState,
    request_id::RequestId,
    response::{ApiError, ApiResponse, api_error},
};
use crate::{logging, metrics};

#[derive(Debug, Deserialize)]
pub struct InitializeRequest {
    pub tables: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub customers: i64,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    #[serde(rename = "bookingID")]
    pub booking_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveData {
    #[serde(rename = "bookingID")]
    pub booking_id: String,
    pub tables_booked: u32,
    pub remaining_tables: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelData {
    pub tables_freed: u32,
    pub remaining_tables: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    pub available_tables: u32,
}

/// HTTP status for each reservation error
pub fn status_for(err: &ReservationError) -> StatusCode {
    match err {
        ReservationError::InvalidBookingId(_) => StatusCode::NOT_FOUND,
        ReservationError::BookingIdSpaceExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        ReservationError::AlreadyInitialized
        | ReservationError::NotInitialized
        | ReservationError::InvalidTableCount { .. }
        | ReservationError::InvalidPartySize(_)
        | ReservationError::InsufficientCapacity { .. } => StatusCode::BAD_REQUEST,
    }
}

fn reservation_error(
    operation: &str,
    message: &str,
    request_id: &RequestId,
    err: &ReservationError,
) -> ApiError {
    if err.is_internal() {
        tracing::error!(
            request_id = request_id.as_str(),
            operation = operation,
            error = %err,
            "{}",
            message
        );
    } else {
        logging::log_table_event(
            request_id.as_str(),
            operation,
            err.kind(),
            None,
            &err.to_string(),
        );
    }

    api_error(status_for(err), message, err.client_message())
}

/// Set the availability gauge from a fresh ledger read.
///
/// The value is read after the handler's own operation, so it is never older
/// than that commit. Under concurrent writes it may already trail the ledger.
async fn publish_availability(state: &AppState) -> u32 {
    let available = state.service.available_tables().await;
    metrics::tables_available(available);
    available
}

fn body_error(request_id: &RequestId, rejection: JsonRejection) -> ApiError {
    tracing::warn!(
        request_id = request_id.as_str(),
        error = %rejection.body_text(),
        "Rejected request body"
    );
    api_error(
        StatusCode::BAD_REQUEST,
        "Invalid request body",
        rejection.body_text(),
    )
}

/// Initialize the restaurant's tables.
///
/// # Request Body
///
/// ```json
/// {"tables": 10}
/// ```
///
/// # Response
///
/// Returns `200 OK` with `{"success": true, "message": "Tables initialized successfully"}`.
///
/// # Errors
///
/// - `400 Bad Request`: Table count outside `1..=MAX_TABLES`, tables already
///   initialized, or malformed body
pub async fn initialize_tables(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<InitializeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Json(request) = payload.map_err(|r| body_error(&request_id, r))?;

    match state.service.initialize_tables(request.tables).await {
        Ok(()) => {
            let available = publish_availability(&state).await;
            logging::log_table_event(
                request_id.as_str(),
                "initialize",
                "ok",
                Some(available),
                "Tables initialized",
            );
            Ok(Json(ApiResponse::success(
                "Tables initialized successfully",
                None,
            )))
        }
        Err(e) => Err(reservation_error(
            "initialize",
            "Initialization error",
            &request_id,
            &e,
        )),
    }
}

/// Reserve tables for a party.
///
/// # Request Body
///
/// ```json
/// {"customers": 3}
/// ```
///
/// # Response
///
/// Returns `200 OK`:
/// ```json
/// {
///   "success": true,
///   "message": "Reservation successful",
///   "data": {"bookingID": "K3Z9QA", "tablesBooked": 1, "remainingTables": 9}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive party size, not enough tables, tables not
///   initialized, or malformed body
/// - `500 Internal Server Error`: No unique booking ID could be allocated
pub async fn reserve_tables(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ReserveData>>, ApiError> {
    let Json(request) = payload.map_err(|r| body_error(&request_id, r))?;

    match state.service.reserve_tables(request.customers).await {
        Ok(reservation) => {
            metrics::reservations_total("ok");
            publish_availability(&state).await;
            tracing::info!(
                request_id = request_id.as_str(),
                booking_id = reservation.booking_id.as_str(),
                customers = request.customers,
                tables_booked = reservation.tables_booked,
                remaining_tables = reservation.remaining_tables,
                "Reservation successful"
            );

            Ok(Json(ApiResponse::success(
                "Reservation successful",
                Some(ReserveData {
                    booking_id: reservation.booking_id.into_string(),
                    tables_booked: reservation.tables_booked,
                    remaining_tables: reservation.remaining_tables,
                }),
            )))
        }
        Err(e) => {
            metrics::reservations_total(e.kind());
            Err(reservation_error("reserve", "Reservation failed", &request_id, &e))
        }
    }
}

/// Cancel a reservation.
///
/// # Request Body
///
/// ```json
/// {"bookingID": "K3Z9QA"}
/// ```
///
/// # Response
///
/// Returns `200 OK` with `data: {"tablesFreed": 1, "remainingTables": 10}`.
///
/// # Errors
///
/// - `400 Bad Request`: Tables not initialized or malformed body
/// - `404 Not Found`: Unknown or already cancelled booking ID
pub async fn cancel_reservation(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<CancelRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CancelData>>, ApiError> {
    let Json(request) = payload.map_err(|r| body_error(&request_id, r))?;

    match state.service.cancel_reservation(&request.booking_id).await {
        Ok(cancellation) => {
            metrics::cancellations_total("ok");
            publish_availability(&state).await;
            tracing::info!(
                request_id = request_id.as_str(),
                booking_id = request.booking_id.as_str(),
                tables_freed = cancellation.tables_freed,
                remaining_tables = cancellation.remaining_tables,
                "Reservation cancelled"
            );

            Ok(Json(ApiResponse::success(
                "Reservation cancelled successfully",
                Some(CancelData {
                    tables_freed: cancellation.tables_freed,
                    remaining_tables: cancellation.remaining_tables,
                }),
            )))
        }
        Err(e) => {
            metrics::cancellations_total(e.kind());
            Err(reservation_error("cancel", "Cancellation failed", &request_id, &e))
        }
    }
}

/// Number of free tables.
///
/// Returns `200 OK` with `data: {"availableTables": 7}`. Reads `0` before
/// initialization.
pub async fn available_tables(
    State(state): State<AppState>,
) -> Json<ApiResponse<AvailabilityData>> {
    let available_tables = state.service.available_tables().await;
    Json(ApiResponse::success(
        "Available tables",
        Some(AvailabilityData { available_tables }),
    ))
}

/// Full ledger status: totals, availability and active booking count.
pub async fn status(State(state): State<AppState>) -> Json<ApiResponse<LedgerSnapshot>> {
    Json(ApiResponse::success(
        "Ledger status",
        Some(state.service.status().await),
    ))
}
