//! Ledger capability contract.
//!
//! The reservation policy only ever talks to a `dyn TableLedger`, so a
//! persistent store can replace [`InMemoryLedger`](super::InMemoryLedger)
//! without touching the policy.

use async_trait::async_trait;

use super::errors::LedgerResult;
use super::models::{Booking, BookingHandle, BookingId, CancelReceipt, LedgerSnapshot};

/// Atomic table bookkeeping for one restaurant
#[async_trait]
pub trait TableLedger: Send + Sync {
    /// Set the table count. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// * `LedgerError::AlreadyInitialized` - A table count is already set
    async fn initialize(&self, total_tables: u32) -> LedgerResult<()>;

    /// Take `tables_needed` tables out of availability and record a booking
    /// under `id`.
    ///
    /// # Errors
    ///
    /// * `LedgerError::NotInitialized` - `initialize` has not run
    /// * `LedgerError::InsufficientCapacity` - Fewer free tables than requested
    /// * `LedgerError::DuplicateBookingId` - `id` already names an active booking
    async fn reserve(
        &self,
        id: BookingId,
        party_size: u32,
        tables_needed: u32,
    ) -> LedgerResult<BookingHandle>;

    /// Drop the booking and return its tables to availability.
    ///
    /// # Errors
    ///
    /// * `LedgerError::BookingNotFound` - No active booking with this id
    async fn cancel(&self, id: &BookingId) -> LedgerResult<CancelReceipt>;

    /// Number of free tables
    async fn available_tables(&self) -> u32;

    /// Whether `initialize` has succeeded
    async fn is_initialized(&self) -> bool;

    /// Consistent view of counts and active bookings
    async fn snapshot(&self) -> LedgerSnapshot;

    /// Look up one active booking
    async fn booking(&self, id: &BookingId) -> Option<Booking>;
}
