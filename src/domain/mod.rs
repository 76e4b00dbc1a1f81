//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact
//! record: its name, phone numbers and birth date. Each value object
//! validates at construction time, so an invalid field can never be stored
//! in a record.

pub mod birth_date;
pub mod contact_name;
pub mod errors;
pub mod field;
pub mod phone;

pub use birth_date::{BirthDate, DATE_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use field::ValidatedField;
pub use phone::PhoneNumber;
