//! Contact Book - a personal contact directory with birthday reminders.
//!
//! Stores named contact records (phone numbers and an optional birthday),
//! supports lookup and mutation by name, and lists the contacts whose
//! birthdays fall within an upcoming window of days, moving weekend dates
//! to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone number, birth date)
//! - **models**: The contact record
//! - **directory**: The name-keyed directory and the upcoming birthday scan
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Interactive assistant driving a directory from text commands

pub mod cli;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use cli::{Assistant, Command, Reply};
pub use config::Config;
pub use directory::{Directory, SharedDirectory, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use domain::{BirthDate, ContactName, PhoneNumber, ValidatedField, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::{BirthdayOutcome, ContactRecord};
