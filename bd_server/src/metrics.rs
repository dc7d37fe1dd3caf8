//! Prometheus metrics for monitoring reservation traffic.
//!
//! Metrics are recorded through the `metrics` facade and, when an exporter is
//! installed, exposed in Prometheus text format for scraping.
//!
//! # Metrics
//!
//! - `http_requests_total{method,path,status}`
//! - `http_request_duration_ms{method,path}`
//! - `reservations_total{outcome}`
//! - `cancellations_total{outcome}`
//! - `tables_available`
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use bd_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::reservations_total("ok");
//! metrics::tables_available(9);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`. Without an exporter
/// every recording call below is a no-op.
///
/// # Returns
///
/// Result indicating success or error message
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Reservation Metrics
// ============================================================================

/// Record a reservation attempt by outcome (`ok` or an error kind).
pub fn reservations_total(outcome: &str) {
    metrics::counter!("reservations_total", "outcome" => outcome.to_string()).increment(1);
}

/// Record a cancellation attempt by outcome.
pub fn cancellations_total(outcome: &str) {
    metrics::counter!("cancellations_total", "outcome" => outcome.to_string()).increment(1);
}

/// Set the current number of free tables.
///
/// Last value read by a handler; concurrent writers may briefly leave it one
/// update behind the ledger.
pub fn tables_available(count: u32) {
    metrics::gauge!("tables_available").set(f64::from(count));
}
