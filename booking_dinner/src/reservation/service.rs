//! Reservation service: business rules in front of the table ledger.

use std::sync::Arc;

use super::{
    booking_id::BookingIdGenerator,
    config::RestaurantConfig,
    errors::{ReservationError, ReservationResult, RestaurantConfigError},
};
use crate::ledger::{BookingId, LedgerError, LedgerSnapshot, TableLedger};

/// Fresh ids tried per reservation before giving up on collisions
pub const MAX_BOOKING_ID_ATTEMPTS: usize = 8;

/// Outcome of a successful reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub booking_id: BookingId,
    pub tables_booked: u32,
    pub remaining_tables: u32,
}

/// Outcome of a successful cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancellation {
    pub tables_freed: u32,
    pub remaining_tables: u32,
}

/// Reservation service
///
/// Holds no mutable state of its own; all bookkeeping goes through the
/// injected ledger, so one instance can be shared across request handlers.
#[derive(Clone)]
pub struct ReservationService {
    ledger: Arc<dyn TableLedger>,
    config: RestaurantConfig,
    ids: BookingIdGenerator,
}

impl ReservationService {
    /// Create a new reservation service
    ///
    /// # Arguments
    ///
    /// * `ledger` - Table ledger shared with every other user of the service
    /// * `config` - Restaurant configuration
    ///
    /// # Errors
    ///
    /// Returns `RestaurantConfigError` if `config` fails validation
    pub fn new(
        ledger: Arc<dyn TableLedger>,
        config: RestaurantConfig,
    ) -> Result<Self, RestaurantConfigError> {
        config.validate()?;
        let ids = BookingIdGenerator::new(&config.booking_code);

        Ok(Self {
            ledger,
            config,
            ids,
        })
    }

    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    /// Set the restaurant's table count
    ///
    /// # Errors
    ///
    /// * `ReservationError::InvalidTableCount` - `num_tables` outside `1..=max_tables`
    /// * `ReservationError::AlreadyInitialized` - Tables were already set
    pub async fn initialize_tables(&self, num_tables: i64) -> ReservationResult<()> {
        let total = u32::try_from(num_tables)
            .ok()
            .filter(|n| (1..=self.config.max_tables).contains(n))
            .ok_or(ReservationError::InvalidTableCount {
                requested: num_tables,
                max: self.config.max_tables,
            })?;

        self.ledger
            .initialize(total)
            .await
            .map_err(Self::translate)
    }

    /// Reserve enough tables to seat `party_size` guests
    ///
    /// # Returns
    ///
    /// * `ReservationResult<Reservation>` - Booking id, tables booked and tables left
    ///
    /// # Errors
    ///
    /// * `ReservationError::NotInitialized` - Tables have not been initialized,
    ///   whatever the party size
    /// * `ReservationError::InvalidPartySize` - `party_size` is not a positive `u32`
    /// * `ReservationError::InsufficientCapacity` - Not enough free tables
    /// * `ReservationError::BookingIdSpaceExhausted` - Every generated id collided
    pub async fn reserve_tables(&self, party_size: i64) -> ReservationResult<Reservation> {
        if !self.ledger.is_initialized().await {
            return Err(ReservationError::NotInitialized);
        }

        let guests = u32::try_from(party_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ReservationError::InvalidPartySize(party_size))?;

        let tables_needed = self.tables_needed(guests);

        for _ in 0..MAX_BOOKING_ID_ATTEMPTS {
            let id = self.ids.generate();
            match self.ledger.reserve(id, guests, tables_needed).await {
                Ok(handle) => {
                    return Ok(Reservation {
                        booking_id: handle.id,
                        tables_booked: tables_needed,
                        remaining_tables: handle.available_tables,
                    });
                }
                Err(LedgerError::DuplicateBookingId(_)) => continue,
                Err(e) => return Err(Self::translate(e)),
            }
        }

        Err(ReservationError::BookingIdSpaceExhausted {
            attempts: MAX_BOOKING_ID_ATTEMPTS,
        })
    }

    /// Tables needed to seat `party_size` guests
    pub fn tables_needed(&self, party_size: u32) -> u32 {
        self.config.tables_for_party(party_size)
    }

    /// Cancel a booking and free its tables
    ///
    /// # Errors
    ///
    /// * `ReservationError::NotInitialized` - Tables have not been initialized
    /// * `ReservationError::InvalidBookingId` - No active booking with this id
    pub async fn cancel_reservation(&self, booking_id: &str) -> ReservationResult<Cancellation> {
        if !self.ledger.is_initialized().await {
            return Err(ReservationError::NotInitialized);
        }

        let receipt = self
            .ledger
            .cancel(&BookingId::from(booking_id))
            .await
            .map_err(Self::translate)?;

        Ok(Cancellation {
            tables_freed: receipt.tables_freed,
            remaining_tables: receipt.available_tables,
        })
    }

    /// Number of free tables
    pub async fn available_tables(&self) -> u32 {
        self.ledger.available_tables().await
    }

    /// Consistent view of the ledger
    pub async fn status(&self) -> LedgerSnapshot {
        self.ledger.snapshot().await
    }

    fn translate(err: LedgerError) -> ReservationError {
        match err {
            LedgerError::AlreadyInitialized => ReservationError::AlreadyInitialized,
            LedgerError::NotInitialized => ReservationError::NotInitialized,
            LedgerError::InsufficientCapacity {
                requested,
                available,
            } => ReservationError::InsufficientCapacity {
                requested,
                available,
            },
            LedgerError::BookingNotFound(id) => ReservationError::InvalidBookingId(id.into_string()),
            // Only reachable if a caller bypasses the retry loop
            LedgerError::DuplicateBookingId(_) => ReservationError::BookingIdSpaceExhausted {
                attempts: 1,
            },
        }
    }
}
