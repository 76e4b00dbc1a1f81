//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birth date failed its format check
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Can not find {0} in the phone book")]
    NotFound(String),

    /// The record already has a birthday
    #[error("Birthday already defined for {0}")]
    AlreadySet(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced to the user by the interactive assistant.
///
/// The `Display` text of each variant is the reply printed for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed
    #[error("Please enter a command.")]
    EmptyInput,

    /// The command was given too few arguments
    #[error("Give me {0} please.")]
    MissingArguments(&'static str),

    /// No record with this name
    #[error("Contact not found: {0}.")]
    ContactNotFound(String),

    /// The window argument of `birthdays` is not a day count
    #[error("Window must be a number of days, got: {0}")]
    InvalidWindow(String),

    /// A record operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::InvalidFormat(err))
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
