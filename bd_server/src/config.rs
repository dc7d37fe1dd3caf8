//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use booking_dinner::reservation::{
    BookingCodeConfig, DEFAULT_CHARSET, RestaurantConfig, RestaurantConfigError,
};
use std::net::SocketAddr;
use std::str::FromStr;

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Restaurant configuration handed to the reservation service
    pub restaurant: RestaurantConfig,
    /// Prometheus exporter address; exporter disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
    /// Log output format
    pub log_format: LogFormat,
}

/// Values given on the command line, which win over the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<SocketAddr>,
    pub seats_per_table: Option<u32>,
    pub max_tables: Option<u32>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match overrides.bind {
            Some(bind) => bind,
            None => parse_var(&lookup, "SERVER_BIND")?.unwrap_or_else(default_bind),
        };

        let seats_per_table = match overrides.seats_per_table {
            Some(seats) => seats,
            None => parse_var(&lookup, "SEATS_PER_TABLE")?.unwrap_or(4),
        };

        let max_tables = match overrides.max_tables {
            Some(max) => max,
            None => parse_var(&lookup, "MAX_TABLES")?.unwrap_or(20),
        };

        let booking_code = BookingCodeConfig {
            charset: lookup("BOOKING_CODE_CHARSET").unwrap_or_else(|| DEFAULT_CHARSET.to_string()),
            length: parse_var(&lookup, "BOOKING_CODE_LENGTH")?.unwrap_or(6),
        };

        let restaurant = RestaurantConfig {
            seats_per_table,
            max_tables,
            booking_code,
        };

        let metrics_bind = parse_var(&lookup, "METRICS_BIND")?;
        let log_format = parse_var(&lookup, "LOG_FORMAT")?.unwrap_or_default();

        Ok(ServerConfig {
            bind,
            restaurant,
            metrics_bind,
            log_format,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.restaurant.validate()?;

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Invalid restaurant configuration: {0}")]
    Restaurant(#[from] RestaurantConfigError),
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            }),
    }
}
