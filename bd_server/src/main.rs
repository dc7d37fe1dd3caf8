//! Restaurant table reservation server.
//!
//! Serves one in-memory table ledger over HTTP. State lives for the life of
//! the process.

use std::sync::Arc;

use anyhow::{Context, Error};
use bd_server::{
    api,
    config::{CliOverrides, ServerConfig},
    logging, metrics,
};
use booking_dinner::{InMemoryLedger, ReservationService};
use pico_args::Arguments;

const HELP: &str = "\
Run a restaurant table reservation server

USAGE:
  bd_server [OPTIONS]

OPTIONS:
  --bind             IP:PORT  Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --seats-per-table  N        Seats at every table        [default: env SEATS_PER_TABLE or 4]
  --max-tables       N        Largest allowed table count [default: env MAX_TABLES or 20]

FLAGS:
  -h, --help                  Print help information

ENVIRONMENT:
  SERVER_BIND                 Server bind address (e.g., 0.0.0.0:8080)
  SEATS_PER_TABLE             Seats at every table
  MAX_TABLES                  Upper bound for /initialize
  BOOKING_CODE_CHARSET        Booking ID alphabet [default: A-Z0-9]
  BOOKING_CODE_LENGTH         Booking ID length [default: 6]
  METRICS_BIND                Prometheus exporter address (disabled when unset)
  LOG_FORMAT                  pretty or json [default: pretty]
  RUST_LOG                    Log filter
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        bind: pargs.opt_value_from_str("--bind")?,
        seats_per_table: pargs.opt_value_from_str("--seats-per-table")?,
        max_tables: pargs.opt_value_from_str("--max-tables")?,
    };

    let config = ServerConfig::from_env(overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    logging::init(config.log_format);
    tracing::info!(
        bind = %config.bind,
        seats_per_table = config.restaurant.seats_per_table,
        max_tables = config.restaurant.max_tables,
        "Starting reservation server"
    );

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!(%metrics_bind, "Prometheus exporter listening");
    }

    let ledger = Arc::new(InMemoryLedger::new());
    let service = ReservationService::new(ledger, config.restaurant.clone())
        .context("Failed to create reservation service")?;

    let app = api::create_router(api::AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    tracing::info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
