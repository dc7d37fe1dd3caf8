//! Reservation error types.

use thiserror::Error;

/// Reservation policy errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// Tables were already initialized
    #[error("Tables have already been initialized")]
    AlreadyInitialized,

    /// Tables have not been initialized yet
    #[error("Tables have not been initialized")]
    NotInitialized,

    /// Table count outside `1..=max`
    #[error("Number of tables must be between 1 and {max}, got {requested}")]
    InvalidTableCount { requested: i64, max: u32 },

    /// Party size must be positive
    #[error("Number of customers must be positive, got {0}")]
    InvalidPartySize(i64),

    /// Not enough free tables for the party
    #[error("Not enough tables available for the reservation: requested {requested}, available {available}")]
    InsufficientCapacity { requested: u32, available: u32 },

    /// Unknown or already-cancelled booking
    #[error("Invalid booking ID: {0}")]
    InvalidBookingId(String),

    /// Every generated id collided with an active booking
    #[error("Could not allocate a unique booking ID after {attempts} attempts")]
    BookingIdSpaceExhausted { attempts: usize },
}

impl ReservationError {
    /// Whether the failure is on our side rather than the caller's
    pub fn is_internal(&self) -> bool {
        matches!(self, ReservationError::BookingIdSpaceExhausted { .. })
    }

    /// Stable snake_case name of the error kind, for logs and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            ReservationError::AlreadyInitialized => "already_initialized",
            ReservationError::NotInitialized => "not_initialized",
            ReservationError::InvalidTableCount { .. } => "invalid_table_count",
            ReservationError::InvalidPartySize(_) => "invalid_party_size",
            ReservationError::InsufficientCapacity { .. } => "insufficient_capacity",
            ReservationError::InvalidBookingId(_) => "invalid_booking_id",
            ReservationError::BookingIdSpaceExhausted { .. } => "booking_id_space_exhausted",
        }
    }

    /// Get a client-safe error message
    ///
    /// Internal failures are reported generically; every other error is the
    /// caller's to fix and is returned verbatim.
    pub fn client_message(&self) -> String {
        match self {
            ReservationError::BookingIdSpaceExhausted { .. } => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for reservation operations
pub type ReservationResult<T> = Result<T, ReservationError>;

/// Errors raised while validating a [`RestaurantConfig`](super::RestaurantConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestaurantConfigError {
    #[error("Seats per table must be greater than 0")]
    ZeroSeatsPerTable,

    #[error("Max tables must be greater than 0")]
    ZeroMaxTables,

    #[error("Booking code charset must not be empty")]
    EmptyCharset,

    #[error("Booking code charset contains '{0}' more than once")]
    DuplicateCharsetSymbol(char),

    #[error("Booking code length must be greater than 0")]
    ZeroCodeLength,
}
