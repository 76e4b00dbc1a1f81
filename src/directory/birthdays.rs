//! Upcoming birthday scan.
//!
//! A birthday is upcoming when its next occurrence, counting today, is at
//! most `window_days` away. Occurrences that fall on a weekend are
//! congratulated on the following Monday.

use super::Directory;
use crate::domain::{BirthDate, DATE_FORMAT};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Window used when the caller does not pick one.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Congratulation date as `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl Directory {
    /// Contacts whose birthday falls within `[today, today + window_days]`.
    ///
    /// Results follow listing order. Records without a birthday are
    /// skipped, as are birthdays whose day or month cannot land on any
    /// calendar (see [`BirthDate::anniversary_in`]).
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(next) = next_occurrence(birthday, today) else {
                    tracing::warn!(
                        name = %record.name(),
                        birthday = %birthday,
                        "Skipping birthday that is not a calendar date"
                    );
                    return None;
                };

                let delta = next.signed_duration_since(today).num_days();
                if !(0..=window).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: adjust_for_weekend(next).format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }

    /// [`Directory::upcoming_birthdays`] relative to the local calendar date.
    pub fn upcoming_birthdays_from_today(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(window_days, Local::now().date_naive())
    }
}

/// The first occurrence of `birthday` on or after `today`.
fn next_occurrence(birthday: &BirthDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The first `weekday` strictly after `from`.
fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = weekday.num_days_from_monday();
    let current = from.weekday().num_days_from_monday();
    let ahead = match (7 + target - current) % 7 {
        0 => 7,
        n => n,
    };
    from + Days::new(u64::from(ahead))
}
