//! Booking code generation.

use rand::Rng;

use super::config::BookingCodeConfig;
use crate::ledger::BookingId;

/// Draws fixed-length booking codes uniformly from a charset.
///
/// Randomness comes from rand's thread-local generator, which is seeded from
/// the OS once per thread. Codes are not checked for uniqueness here; the
/// ledger rejects collisions.
#[derive(Debug, Clone)]
pub struct BookingIdGenerator {
    charset: Vec<char>,
    length: usize,
}

impl BookingIdGenerator {
    pub fn new(config: &BookingCodeConfig) -> Self {
        Self {
            charset: config.charset.chars().collect(),
            length: config.length,
        }
    }

    pub fn generate(&self) -> BookingId {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| self.charset[rng.random_range(0..self.charset.len())])
            .collect();
        BookingId::new(code)
    }
}
