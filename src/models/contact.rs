//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{BirthDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of [`ContactRecord::add_birthday`].
///
/// A record holds at most one birthday. A second attempt is reported as
/// `AlreadyDefined` rather than an error so the caller can decide whether
/// that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayOutcome {
    /// The birthday was stored
    Added,
    /// The record already had a birthday; nothing changed
    AlreadyDefined,
}

/// A single contact in the directory.
///
/// Phones keep insertion order and may repeat. The name is fixed for the
/// lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Identity key of the record
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, set at most once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthDate>,
}

impl ContactRecord {
    /// Create a record with a name, no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthDate> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Remove the first phone equal to `raw` and return it.
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<PhoneNumber> {
        let index = self.position_of(raw)?;
        tracing::debug!(name = %self.name, phone = raw, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything is looked up, so a failed edit
    /// never changes the phone list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self.position_of(old)?;
        tracing::debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Set the birthday if none is stored yet.
    ///
    /// When a birthday already exists the input is not inspected and
    /// `BirthdayOutcome::AlreadyDefined` is returned.
    pub fn add_birthday(&mut self, raw: &str) -> ContactResult<BirthdayOutcome> {
        if self.birthday.is_some() {
            return Ok(BirthdayOutcome::AlreadyDefined);
        }
        let birthday = BirthDate::new(raw)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Adding birthday");
        self.birthday = Some(birthday);
        Ok(BirthdayOutcome::Added)
    }

    /// Like [`ContactRecord::add_birthday`], but a second birthday is an error.
    pub fn add_birthday_strict(&mut self, raw: &str) -> ContactResult<()> {
        match self.add_birthday(raw)? {
            BirthdayOutcome::Added => Ok(()),
            BirthdayOutcome::AlreadyDefined => {
                Err(ContactError::AlreadySet(self.name.as_str().to_string()))
            }
        }
    }

    fn position_of(&self, raw: &str) -> ContactResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone == raw)
            .ok_or_else(|| ContactError::NotFound(raw.to_string()))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
