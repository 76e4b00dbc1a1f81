//! The contact directory and its queries.

mod address_book;
mod birthdays;
mod shared;

pub use address_book::Directory;
pub use birthdays::{adjust_for_weekend, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use shared::SharedDirectory;
