//! Panic recovery for request handlers.
//!
//! Installed through `tower_http::catch_panic::CatchPanicLayer::custom` so a
//! panicking handler answers with the usual JSON envelope instead of dropping
//! the connection.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::response::ApiResponse;

/// Turn a caught panic into a `500 Internal Server Error` response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Recovered from panic");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(
            "Internal Server Error",
            "Internal server error",
        )),
    )
        .into_response()
}
