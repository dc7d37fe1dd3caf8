//! Structured logging configuration.
//!
//! This module provides structured logging with request correlation and
//! reservation outcome events.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,hyper=warn,tower_http=warn";

/// Initialize structured logging
///
/// Features:
/// - Request ID correlation (see [`crate::api::request_id`])
/// - JSON formatting for production
/// - Configurable log levels via RUST_LOG env var
///
/// # Example
///
/// ```no_run
/// use bd_server::{config::LogFormat, logging};
///
/// #[tokio::main]
/// async fn main() {
///     logging::init(LogFormat::Pretty);
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true);
            registry.with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_target(true);
            registry.with(fmt_layer).init();
        }
    }

    tracing::info!(?format, "Structured logging initialized");
}

/// Log the outcome of a table operation
///
/// # Arguments
///
/// * `request_id` - Correlation id, matching the access log line
/// * `operation` - `initialize`, `reserve` or `cancel`
/// * `outcome` - `ok` or an error kind
/// * `available_tables` - Availability after the operation, when known
/// * `message` - Event message
pub fn log_table_event(
    request_id: &str,
    operation: &str,
    outcome: &str,
    available_tables: Option<u32>,
    message: &str,
) {
    if outcome == "ok" {
        tracing::info!(
            request_id = request_id,
            operation = operation,
            outcome = outcome,
            available_tables = available_tables,
            "{}",
            message
        );
    } else {
        tracing::warn!(
            request_id = request_id,
            operation = operation,
            outcome = outcome,
            available_tables = available_tables,
            "{}",
            message
        );
    }
}

/// Log API request/response
///
/// # Arguments
///
/// * `request_id` - Correlation id
/// * `method` - HTTP method
/// * `path` - Request path
/// * `status_code` - Response status code
/// * `duration_ms` - Request duration in milliseconds
pub fn log_api_request(
    request_id: &str,
    method: &str,
    path: &str,
    status_code: u16,
    duration_ms: u64,
) {
    tracing::info!(
        request_id = request_id,
        http_method = method,
        http_path = path,
        http_status = status_code,
        duration_ms = duration_ms,
        "Request completed"
    );

    if duration_ms > 1000 {
        tracing::warn!(
            request_id = request_id,
            http_path = path,
            duration_ms = duration_ms,
            "PERFORMANCE: Slow request"
        );
    }
}
