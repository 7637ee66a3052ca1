//! # CLI Errors
//!
//! Failures of the command-line layer. Ring construction errors from
//! `stagering-core` pass through unchanged.

use stagering_core::RingError;
use thiserror::Error;

/// Errors surfaced by stagering commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The ring rejected its input.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// The configuration file could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
