//! In-process ledger backed by a tokio `RwLock`.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, hash_map::Entry};
use tokio::sync::RwLock;

use super::{
    errors::{LedgerError, LedgerResult},
    models::{Booking, BookingHandle, BookingId, CancelReceipt, LedgerSnapshot},
    store::TableLedger,
};

#[derive(Debug, Default)]
struct LedgerState {
    initialized: bool,
    total_tables: u32,
    available_tables: u32,
    bookings: HashMap<BookingId, Booking>,
}

impl LedgerState {
    fn booked_tables(&self) -> u32 {
        self.bookings.values().map(|b| b.tables_booked).sum()
    }
}

/// Ledger that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    /// Create an uninitialized ledger
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TableLedger for InMemoryLedger {
    async fn initialize(&self, total_tables: u32) -> LedgerResult<()> {
        let mut state = self.state.write().await;

        if state.initialized {
            return Err(LedgerError::AlreadyInitialized);
        }

        state.total_tables = total_tables;
        state.available_tables = total_tables;
        state.initialized = true;
        Ok(())
    }

    async fn reserve(
        &self,
        id: BookingId,
        party_size: u32,
        tables_needed: u32,
    ) -> LedgerResult<BookingHandle> {
        let mut state = self.state.write().await;

        if !state.initialized {
            return Err(LedgerError::NotInitialized);
        }

        if tables_needed > state.available_tables {
            return Err(LedgerError::InsufficientCapacity {
                requested: tables_needed,
                available: state.available_tables,
            });
        }

        match state.bookings.entry(id.clone()) {
            Entry::Occupied(_) => return Err(LedgerError::DuplicateBookingId(id)),
            Entry::Vacant(slot) => {
                slot.insert(Booking {
                    id: id.clone(),
                    party_size,
                    tables_booked: tables_needed,
                    created_at: Utc::now(),
                });
            }
        }

        state.available_tables -= tables_needed;

        Ok(BookingHandle {
            id,
            available_tables: state.available_tables,
        })
    }

    async fn cancel(&self, id: &BookingId) -> LedgerResult<CancelReceipt> {
        let mut state = self.state.write().await;

        let booking = state
            .bookings
            .remove(id)
            .ok_or_else(|| LedgerError::BookingNotFound(id.clone()))?;

        state.available_tables += booking.tables_booked;

        Ok(CancelReceipt {
            tables_freed: booking.tables_booked,
            available_tables: state.available_tables,
        })
    }

    async fn available_tables(&self) -> u32 {
        self.state.read().await.available_tables
    }

    async fn is_initialized(&self) -> bool {
        self.state.read().await.initialized
    }

    async fn snapshot(&self) -> LedgerSnapshot {
        let state = self.state.read().await;
        LedgerSnapshot {
            initialized: state.initialized,
            total_tables: state.total_tables,
            available_tables: state.available_tables,
            booked_tables: state.booked_tables(),
            active_bookings: state.bookings.len(),
        }
    }

    async fn booking(&self, id: &BookingId) -> Option<Booking> {
        self.state.read().await.bookings.get(id).cloned()
    }
}
