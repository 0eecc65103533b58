//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`CommandError`] is exactly what the user sees.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can report back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No record exists under the requested name
    #[error("This contact does not exist")]
    MissingContact,

    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command needs more arguments than were given, or the record has
    /// no phone at the position the command works on
    #[error("Enter the argument for the command")]
    MissingArgument,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
