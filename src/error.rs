//! Error types for Rudder
//!
//! Dispatch never returns an error to the caller: every fault either prints
//! a diagnostic and terminates the process, or panics for wiring bugs in
//! the embedding application. The enum here carries the user-facing wording
//! for the printed diagnostics so it lives in one place.

use thiserror::Error;

/// User-facing dispatch failures, rendered to the error stream before the
/// process terminates with a non-zero status.
#[derive(Error, Debug)]
pub enum UsageError {
    /// The requested name did not match any runnable subcommand.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A resolved subcommand's flags failed to parse.
    #[error("invalid arguments for '{command}': {reason}")]
    InvalidArgs { command: String, reason: String },
}
