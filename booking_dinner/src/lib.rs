//! # Booking Dinner
//!
//! Table availability tracking for a single restaurant.
//!
//! The crate is split in two layers:
//!
//! - [`ledger`]: the authoritative, concurrency-safe store of total, available
//!   and booked tables. Every mutation is a single atomic check-and-act.
//! - [`reservation`]: the business rules in front of the ledger. Converts a
//!   party size into a table count, validates input, generates booking codes
//!   and maps ledger failures to caller-facing errors.
//!
//! The ledger is an explicit instance handed to the service, never a global.
//!
//! ## Example
//!
//! ```
//! use booking_dinner::{InMemoryLedger, ReservationError, ReservationService, RestaurantConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = ReservationService::new(
//!         Arc::new(InMemoryLedger::new()),
//!         RestaurantConfig::default(),
//!     )
//!     .unwrap();
//!
//!     assert_eq!(
//!         service.reserve_tables(2).await,
//!         Err(ReservationError::NotInitialized)
//!     );
//! }
//! ```

/// Table ledger and its in-memory implementation.
pub mod ledger;
pub use ledger::{InMemoryLedger, LedgerError, LedgerSnapshot, TableLedger};

/// Reservation rules, configuration and booking codes.
pub mod reservation;
pub use reservation::{
    Cancellation, Reservation, ReservationError, ReservationResult, ReservationService,
    RestaurantConfig, RestaurantConfigError,
};
