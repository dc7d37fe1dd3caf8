//! Reservation policy: turns party sizes into table demand.
//!
//! This module implements:
//! - Party size to table count conversion (ceiling division by seats per table)
//! - Input validation for table counts and party sizes
//! - Booking code generation with collision retry
//! - Translation of ledger failures into caller-facing errors
//!
//! ## Example
//!
//! ```
//! use booking_dinner::ledger::InMemoryLedger;
//! use booking_dinner::reservation::{RestaurantConfig, ReservationService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ledger = Arc::new(InMemoryLedger::new());
//!     let service = ReservationService::new(ledger, RestaurantConfig::default())?;
//!
//!     service.initialize_tables(10).await?;
//!
//!     let reservation = service.reserve_tables(3).await?;
//!     assert_eq!(reservation.tables_booked, 1);
//!     assert_eq!(reservation.remaining_tables, 9);
//!
//!     let cancellation = service
//!         .cancel_reservation(reservation.booking_id.as_str())
//!         .await?;
//!     assert_eq!(cancellation.remaining_tables, 10);
//!     Ok(())
//! }
//! ```

pub mod booking_id;
pub mod config;
pub mod errors;
pub mod service;

pub use booking_id::BookingIdGenerator;
pub use config::{BookingCodeConfig, DEFAULT_CHARSET, RestaurantConfig};
pub use errors::{ReservationError, ReservationResult, RestaurantConfigError};
pub use service::{Cancellation, MAX_BOOKING_ID_ATTEMPTS, Reservation, ReservationService};
