//! Integration tests for the upcoming birthday scan.
//!
//! Scenarios use fixed dates: Jan 1, 2024 is a Monday and Dec 30, 2023 a
//! Saturday.

mod fixtures;
use fixtures::*;

use contact_book::{Directory, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};

fn congratulation_dates(book: &Directory, window: u32, today: chrono::NaiveDate) -> Vec<String> {
    book.upcoming_birthdays(window, today)
        .into_iter()
        .map(|entry| entry.congratulation_date)
        .collect()
}

#[test]
fn test_weekday_birthday() {
    let book = directory_with_birthday("Alice", "05.01.1990");
    assert_eq!(
        book.upcoming_birthdays(DEFAULT_BIRTHDAY_WINDOW_DAYS, date(2024, 1, 1)),
        vec![UpcomingBirthday {
            name: "Alice".to_string(),
            congratulation_date: "05.01.2024".to_string(),
        }]
    );
}

#[test]
fn test_weekend_birthday_moves_to_monday() {
    let book = directory_with_birthday("Bob", "06.01.1990");
    assert_eq!(congratulation_dates(&book, 7, date(2024, 1, 1)), vec!["08.01.2024"]);
}

#[test]
fn test_year_rollover() {
    let book = directory_with_birthday("Carl", "02.01.1985");
    let upcoming = book.upcoming_birthdays(7, date(2023, 12, 30));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Carl");
    assert_eq!(upcoming[0].congratulation_date, "02.01.2024");
}

#[test]
fn test_today_counts_and_weekend_today_moves() {
    // Dec 30, 2023 is a Saturday
    let book = directory_with_birthday("Sat", "30.12.1970");
    assert_eq!(congratulation_dates(&book, 0, date(2023, 12, 30)), vec!["01.01.2024"]);
}

#[test]
fn test_window_boundaries() {
    let today = date(2024, 1, 1);
    let mut book = Directory::new();
    book.add(sample_record("Zero", &[], Some("01.01.1990")));
    book.add(sample_record("Seven", &[], Some("08.01.1990")));
    book.add(sample_record("Eight", &[], Some("09.01.1990")));

    let names: Vec<String> = book
        .upcoming_birthdays(7, today)
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["Zero", "Seven"]);
}

#[test]
fn test_records_without_birthday_never_appear() {
    let mut book = Directory::new();
    book.add(sample_record("NoBirthday", &["1234567890"], None));
    book.add(sample_record("Later", &[], Some("03.01.1990")));

    for window in [0, 7, 30, 366] {
        let upcoming = book.upcoming_birthdays(window, date(2024, 1, 1));
        assert!(upcoming.iter().all(|entry| entry.name != "NoBirthday"));
    }
    // A record without a birthday must not end the scan early
    assert_eq!(book.upcoming_birthdays(7, date(2024, 1, 1)).len(), 1);
}

#[test]
fn test_results_follow_listing_order_not_date() {
    let mut book = Directory::new();
    book.add(sample_record("Late", &[], Some("05.01.1990")));
    book.add(sample_record("Early", &[], Some("02.01.1990")));

    let names: Vec<String> = book
        .upcoming_birthdays(7, date(2024, 1, 1))
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["Late", "Early"]);
}

#[test]
fn test_impossible_dates_policy() {
    let mut book = Directory::new();
    book.add(sample_record("Feb31", &[], Some("31.02.1990")));
    book.add(sample_record("Month13", &[], Some("01.13.1990")));

    // 31.02 is observed on the last day of February: Thu Feb 29, 2024
    let upcoming = book.upcoming_birthdays(7, date(2024, 2, 26));
    assert_eq!(
        upcoming,
        vec![UpcomingBirthday {
            name: "Feb31".to_string(),
            congratulation_date: "29.02.2024".to_string(),
        }]
    );
}

#[test]
fn test_upcoming_birthday_serialization() {
    let entry = UpcomingBirthday {
        name: "Alice".to_string(),
        congratulation_date: "05.01.2024".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"name":"Alice","congratulation_date":"05.01.2024"}"#
    );
}
