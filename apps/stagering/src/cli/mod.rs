//! # stagering CLI Module
//!
//! This module implements the CLI interface for stagering.
//!
//! ## Available Commands
//!
//! - `layout` - Print the ring layout as JSON
//! - `show` - Show a ring summary
//! - `check` - Validate the ring configuration
//! - `init` - Write a starter configuration file

mod commands;

use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// stagering - circular stage maps for cyclic pipelines
///
/// Lays out pipeline stages evenly on a ring, highlights the active one,
/// and emits the geometry for a renderer to draw.
#[derive(Parser, Debug)]
#[command(name = "stagering")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the ring configuration (TOML). Falls back to $STAGERING_CONFIG.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ring layout as JSON
    Layout {
        /// Stage to highlight (0-based), overrides the configured one
        #[arg(short, long)]
        active: Option<usize>,
    },

    /// Show a ring summary
    Show {
        /// Stage to highlight (0-based), overrides the configured one
        #[arg(short, long)]
        active: Option<usize>,
    },

    /// Validate the ring configuration
    Check,

    /// Write a starter configuration file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "stagering.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Layout { active }) => cmd_layout(config, active),
        Some(Commands::Show { active }) => cmd_show(config, active, json_mode, cli.quiet),
        Some(Commands::Check) => cmd_check(config, json_mode),
        Some(Commands::Init { output, force }) => cmd_init(&output, force, cli.quiet),
        None => {
            // No subcommand - show the ring by default
            cmd_show(config, None, json_mode, cli.quiet)
        }
    }
}
