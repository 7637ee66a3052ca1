//! # stagering
//!
//! Library side of the stagering binary: configuration loading, CLI
//! definition and command implementations. Exposed so integration tests can
//! drive commands without spawning a process.

pub mod cli;
pub mod config;
pub mod error;

pub use error::CliError;
