//! # stagering
//!
//! Command-line front end for `stagering-core`.
//!
//! ```text
//!   ┌──────────────┐     ┌──────────────────┐     ┌─────────────┐
//!   │ TOML config  │ ──► │  stagering-core  │ ──► │ JSON layout │ ──► renderer
//!   │ or built-in  │     │   (THE RING)     │     │ or summary  │
//!   └──────────────┘     └──────────────────┘     └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Summary of the built-in lifecycle ring
//! stagering show
//!
//! # Layout JSON with the third stage highlighted
//! stagering -c ring.toml layout --active 2
//!
//! # Starter configuration
//! stagering init -o ring.toml
//! ```

use clap::Parser;
use stagering::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing — STAGERING_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries command output.
    let log_format = std::env::var("STAGERING_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "stagering=debug,stagering_core=debug"
    } else {
        "stagering=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
