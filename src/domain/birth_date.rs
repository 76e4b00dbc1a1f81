//! BirthDate value object.

use super::errors::ValidationError;
use super::field::{self, Checked, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTH_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birth date regex")
});

/// Output format for congratulation dates, matching the accepted input form.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A birth date in `DD.MM.YYYY` form.
///
/// Validation is a format check only. A value such as `31.02.2020` is
/// accepted; [`BirthDate::to_date`] returns `None` for it and
/// [`BirthDate::anniversary_in`] decides how it lands on a calendar.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthDate;
///
/// let birthday = BirthDate::new("05.01.1990").unwrap();
/// assert_eq!(birthday.day(), 5);
/// assert_eq!(birthday.month(), 1);
/// assert_eq!(birthday.year(), 1990);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthDate(String);

impl BirthDate {
    /// Create a new BirthDate, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthDate` unless the input is two
    /// digits, a dot, two digits, a dot and four digits.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(date)
    }

    /// Get the birth date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day component as written (00-99).
    pub fn day(&self) -> u32 {
        digits(&self.0.as_bytes()[0..2])
    }

    /// Month component as written (00-99).
    pub fn month(&self) -> u32 {
        digits(&self.0.as_bytes()[3..5])
    }

    /// Year component as written.
    pub fn year(&self) -> i32 {
        // at most 9999, always fits
        digits(&self.0.as_bytes()[6..10]) as i32
    }

    /// The birth date as a calendar date, if it denotes a real day.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
    }

    /// The day this birthday is observed in `year`.
    ///
    /// Days past the end of the month are clamped to its last day, so
    /// `29.02` falls on Feb 28 in non-leap years and `31.04` on Apr 30.
    /// Returns `None` when the month is outside 01-12 or the day is 00 or
    /// greater than 31.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (day, month) = (self.day(), self.month());
        if day == 0 || day > 31 {
            return None;
        }
        let last = last_day_of_month(year, month)?;
        NaiveDate::from_ymd_opt(year, month, day.min(last))
    }
}

impl ValidatedField for BirthDate {
    fn is_valid(raw: &str) -> bool {
        BIRTH_DATE_REGEX.is_match(raw)
    }

    fn rejection(raw: String) -> ValidationError {
        ValidationError::InvalidBirthDate(raw)
    }

    fn from_checked(raw: String, _proof: Checked) -> Self {
        Self(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        field::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        field::deserialize(deserializer)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
