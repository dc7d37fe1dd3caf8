//! Table ledger: the authoritative count of total, available and booked tables.
//!
//! This module implements:
//! - `TableLedger`: the capability contract every ledger store satisfies
//! - `InMemoryLedger`: a lock-protected in-process store
//! - Booking records and the receipts returned by reserve/cancel
//!
//! ## Concurrency
//!
//! Mutations (`initialize`, `reserve`, `cancel`) hold the exclusive write lock
//! for the whole check-and-mutate sequence. Reads take the shared lock and only
//! ever observe committed state.
//!
//! ## Example
//!
//! ```
//! use booking_dinner::ledger::{BookingId, InMemoryLedger, TableLedger};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ledger = InMemoryLedger::new();
//!     ledger.initialize(10).await?;
//!
//!     let handle = ledger.reserve(BookingId::new("AB12CD"), 6, 2).await?;
//!     assert_eq!(handle.available_tables, 8);
//!
//!     let receipt = ledger.cancel(&handle.id).await?;
//!     assert_eq!(receipt.tables_freed, 2);
//!     assert_eq!(receipt.available_tables, 10);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use errors::{LedgerError, LedgerResult};
pub use memory::InMemoryLedger;
pub use models::{Booking, BookingHandle, BookingId, CancelReceipt, LedgerSnapshot};
pub use store::TableLedger;
