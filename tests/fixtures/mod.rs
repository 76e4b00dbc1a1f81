//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records, directories and dates.

use chrono::NaiveDate;
use contact_book::{ContactRecord, Directory};

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// Create a directory holding one record with only a birthday.
#[allow(dead_code)]
pub fn directory_with_birthday(name: &str, birthday: &str) -> Directory {
    std::iter::once(sample_record(name, &[], Some(birthday))).collect()
}

/// Shorthand for a calendar date in tests.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
