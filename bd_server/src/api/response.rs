//! JSON response envelope shared by every endpoint.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response
///
/// ```json
/// {"success": true, "message": "Reservation successful", "data": {...}}
/// {"success": false, "message": "Reservation failed", "error": "..."}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Build an [`ApiError`]
pub fn api_error(status: StatusCode, message: &str, error: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::failure(message, error)))
}
