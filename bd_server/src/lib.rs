//! HTTP server for restaurant table reservations.
//!
//! Wraps a [`booking_dinner::ReservationService`] in an axum router and adds
//! the process concerns around it: configuration, structured logging and
//! Prometheus metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
