//! svn command execution layer
//!
//! This module builds svn invocations, runs them, and parses their output.

mod audit;
mod command;
pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use audit::{AuditEntry, CommandLog, MemoryLog, TracingLog};
pub use command::{CommandKind, CommandLine, CommandOutput, SvnCommand};
pub use executor::SvnExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing svn commands
#[derive(Error, Debug)]
pub enum SvnError {
    /// The process could not be started or printed nothing on stdout
    #[error("`{command}` produced no output")]
    EmptyOutput { command: String },

    #[error("Failed to parse svn output: {0}")]
    ParseError(String),

    #[error("Received an invalid revision number <{0}> while trying to obtain changeset information")]
    UnknownRevision(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Session is shutting down; no new commands are accepted")]
    ShuttingDown,
}
