//! Restaurant configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::RestaurantConfigError;

/// Default booking code alphabet
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Booking code shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCodeConfig {
    /// Symbols a code is drawn from
    pub charset: String,

    /// Symbols per code
    pub length: usize,
}

impl Default for BookingCodeConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            length: 6,
        }
    }
}

/// Restaurant configuration, fixed for the life of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// Seats at every table (default: 4)
    pub seats_per_table: u32,

    /// Upper bound accepted by `initialize_tables` (default: 20)
    pub max_tables: u32,

    /// Booking code generation
    pub booking_code: BookingCodeConfig,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            seats_per_table: 4,
            max_tables: 20,
            booking_code: BookingCodeConfig::default(),
        }
    }
}

impl RestaurantConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), RestaurantConfigError> {
        if self.seats_per_table == 0 {
            return Err(RestaurantConfigError::ZeroSeatsPerTable);
        }

        if self.max_tables == 0 {
            return Err(RestaurantConfigError::ZeroMaxTables);
        }

        if self.booking_code.charset.is_empty() {
            return Err(RestaurantConfigError::EmptyCharset);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.booking_code.charset.chars().find(|c| !seen.insert(*c)) {
            return Err(RestaurantConfigError::DuplicateCharsetSymbol(dup));
        }

        if self.booking_code.length == 0 {
            return Err(RestaurantConfigError::ZeroCodeLength);
        }

        Ok(())
    }

    /// Tables needed to seat `party_size` guests (ceiling division)
    pub fn tables_for_party(&self, party_size: u32) -> u32 {
        party_size.div_ceil(self.seats_per_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RestaurantConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tables_for_party() {
        let config = RestaurantConfig::default();

        assert_eq!(config.tables_for_party(1), 1);
        assert_eq!(config.tables_for_party(3), 1);
        assert_eq!(config.tables_for_party(4), 1);
        assert_eq!(config.tables_for_party(5), 2);
        assert_eq!(config.tables_for_party(8), 2);
        assert_eq!(config.tables_for_party(9), 3);
    }

    #[test]
    fn test_tables_for_party_large_values() {
        let config = RestaurantConfig {
            seats_per_table: 1,
            ..Default::default()
        };
        assert_eq!(config.tables_for_party(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_validate_rejects_zero_seats() {
        let config = RestaurantConfig {
            seats_per_table: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(RestaurantConfigError::ZeroSeatsPerTable)
        );
    }

    #[test]
    fn test_validate_rejects_zero_max_tables() {
        let config = RestaurantConfig {
            max_tables: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(RestaurantConfigError::ZeroMaxTables));
    }

    #[test]
    fn test_validate_rejects_bad_charset() {
        let mut config = RestaurantConfig::default();

        config.booking_code.charset = String::new();
        assert_eq!(config.validate(), Err(RestaurantConfigError::EmptyCharset));

        config.booking_code.charset = "ABCA".to_string();
        assert_eq!(
            config.validate(),
            Err(RestaurantConfigError::DuplicateCharsetSymbol('A'))
        );
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let mut config = RestaurantConfig::default();
        config.booking_code.length = 0;
        assert_eq!(config.validate(), Err(RestaurantConfigError::ZeroCodeLength));
    }
}
