//! Data models for the contact book.
//!
//! This module contains the contact record: a name, its phone numbers and
//! an optional birthday.

pub mod contact;

pub use contact::{BirthdayOutcome, ContactRecord};
