//! Shared validate-then-store capability for string-backed fields.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serializer};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::super::ContactName {}
    impl Sealed for super::super::PhoneNumber {}
    impl Sealed for super::super::BirthDate {}
}

/// Proof that a raw value passed [`ValidatedField::is_valid`].
///
/// Only [`ValidatedField::parse`] can create one, so `from_checked` cannot be
/// used to wrap a string that skipped validation.
pub struct Checked(());

/// A string value that must satisfy a format constraint to exist.
///
/// Implementors only describe their constraint; construction always goes
/// through [`ValidatedField::parse`], which validates before storing. Fields are
/// immutable once built: replacing a value means parsing a new one.
///
/// # Example
///
/// ```
/// use contact_book::domain::{PhoneNumber, ValidatedField};
///
/// let phone = PhoneNumber::parse("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::parse("+380501234567").is_err());
/// ```
pub trait ValidatedField: sealed::Sealed + Sized {
    /// Return true if `raw` satisfies this field's constraint.
    fn is_valid(raw: &str) -> bool;

    /// Build the error reported when `raw` is rejected.
    fn rejection(raw: String) -> ValidationError;

    /// Wrap a value that has already passed validation.
    fn from_checked(raw: String, proof: Checked) -> Self;

    /// Get the stored value as a string slice.
    fn as_str(&self) -> &str;

    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the field's [`ValidationError`] variant if `raw` is rejected.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(Self::rejection(raw));
        }
        Ok(Self::from_checked(raw, Checked(())))
    }
}

// Serde support - every field serializes as its raw string
pub(crate) fn serialize<F, S>(field: &F, serializer: S) -> Result<S::Ok, S::Error>
where
    F: ValidatedField,
    S: Serializer,
{
    serializer.serialize_str(field.as_str())
}

// Serde support - deserialize from string with validation
pub(crate) fn deserialize<'de, F, D>(deserializer: D) -> Result<F, D::Error>
where
    F: ValidatedField,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    F::parse(s).map_err(serde::de::Error::custom)
}
