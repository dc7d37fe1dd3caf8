//! Ledger data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque booking identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BookingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A confirmed reservation of a whole number of tables.
///
/// Bookings are never edited: they are created by a successful reserve and
/// dropped by a successful cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub party_size: u32,
    pub tables_booked: u32,
    pub created_at: DateTime<Utc>,
}

/// Returned by a successful reserve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingHandle {
    pub id: BookingId,
    /// Availability right after this reservation committed
    pub available_tables: u32,
}

/// Returned by a successful cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelReceipt {
    pub tables_freed: u32,
    /// Availability right after this cancellation committed
    pub available_tables: u32,
}

/// Point-in-time view of the whole ledger, read under one lock acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub initialized: bool,
    pub total_tables: u32,
    pub available_tables: u32,
    pub booked_tables: u32,
    pub active_bookings: usize,
}

impl LedgerSnapshot {
    /// `available + booked == total`
    pub fn is_balanced(&self) -> bool {
        u64::from(self.available_tables) + u64::from(self.booked_tables)
            == u64::from(self.total_tables)
    }
}
