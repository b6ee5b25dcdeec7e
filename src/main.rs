//! Static responder
//!
//! Serves one fixed body on `GET /` and nothing else.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────┐    ┌──────────────┐    ┌────────────┐
//!     ─────────────────────▶│   net    │───▶│ http server  │───▶│  routing   │
//!                           │ listener │    │ (axum+layers)│    │ RouteRule  │
//!                           └──────────┘    └──────────────┘    └─────┬──────┘
//!     Client Response                                                 │
//!     ◀───────────────────────────────── template / 405 / 301 / 404 ◀─┘
//! ```
//!
//! With no arguments this runs the `home` variant on port 8080.

use std::path::PathBuf;

use clap::Parser;

use static_responder::config::{load_config, validate_config, ConfigError, ResponderConfig};
use static_responder::observability::init_logging;
use static_responder::Variant;

#[derive(Parser)]
#[command(name = "static-responder")]
#[command(about = "Serve a fixed body on GET /", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Response variant (overrides the config file).
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Log level (overrides the config file; RUST_LOG overrides both).
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResponderConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability.log_level);

    tracing::info!("static-responder v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = static_responder::start(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
