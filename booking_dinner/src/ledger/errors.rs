//! Ledger error types.

use super::models::BookingId;
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// `initialize` was called on a ledger that already holds a table count
    #[error("Tables have already been initialized")]
    AlreadyInitialized,

    /// A reservation was attempted before `initialize`
    #[error("Tables have not been initialized")]
    NotInitialized,

    /// Not enough free tables for the request
    #[error("Not enough tables available: requested {requested}, available {available}")]
    InsufficientCapacity { requested: u32, available: u32 },

    /// No active booking carries this id
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// An active booking already carries this id
    #[error("Duplicate booking id: {0}")]
    DuplicateBookingId(BookingId),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
