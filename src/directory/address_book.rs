//! Name-keyed collection of contact records.

use crate::domain::ContactName;
use crate::models::ContactRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// The contact directory.
///
/// Records are keyed by their exact name. Listing, iteration and the
/// birthday scan follow the order in which names were first added;
/// replacing a record keeps its original position.
///
/// # Example
///
/// ```
/// use contact_book::{ContactRecord, Directory};
///
/// let mut book = Directory::new();
/// let mut john = ContactRecord::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add(john);
///
/// assert!(book.find("John").is_some());
/// book.delete("John");
/// assert!(book.find("John").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: HashMap<ContactName, ContactRecord>,
    order: Vec<ContactName>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// An existing record with the same name is replaced wholesale and
    /// returned.
    pub fn add(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let name = record.name().clone();
        let previous = self.entries.insert(name.clone(), record);
        if previous.is_none() {
            tracing::debug!(name = %name, "Adding contact");
            self.order.push(name);
        } else {
            tracing::debug!(name = %name, "Replacing contact");
        }
        previous
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.entries.get(name)
    }

    /// Exact-match lookup for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.entries.get_mut(name)
    }

    /// Remove the record with this name.
    ///
    /// Deleting a missing name is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.entries.remove(name)?;
        self.order.retain(|key| key.as_str() != name);
        tracing::debug!(name, "Deleted contact");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over records in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(move |name| self.entries.get(name))
    }

    /// Names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(ContactName::as_str)
    }
}

impl fmt::Display for Directory {
    /// One line per record: `name: rendered-record`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", record.name(), record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a ContactRecord;
    type IntoIter = Box<dyn Iterator<Item = &'a ContactRecord> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Extend<ContactRecord> for Directory {
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, records: I) {
        for record in records {
            self.add(record);
        }
    }
}

impl FromIterator<ContactRecord> for Directory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(records: I) -> Self {
        let mut directory = Directory::new();
        directory.extend(records);
        directory
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// Serde support - rebuild the name index from the record list
impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<ContactRecord> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> ContactRecord {
        let mut record = ContactRecord::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_then_find() {
        let mut book = Directory::new();
        let john = record("John", "1234567890");
        assert!(book.add(john.clone()).is_none());
        assert_eq!(book.find("John"), Some(&john));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_is_exact_match() {
        let mut book = Directory::new();
        book.add(record("John", "1234567890"));
        assert!(book.find("john").is_none());
        assert!(book.find("Joh").is_none());
        assert!(book.find("John ").is_none());
    }

    #[test]
    fn test_add_overwrites_without_merge() {
        let mut book = Directory::new();
        book.add(record("John", "1234567890"));
        book.add(record("Jane", "9876543210"));

        let previous = book.add(record("John", "5555555555")).unwrap();
        assert_eq!(previous.phones()[0], "1234567890");

        let john = book.find("John").unwrap();
        assert_eq!(john.phones().len(), 1);
        assert_eq!(john.phones()[0], "5555555555");
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut book = Directory::new();
        book.add(record("Jane", "9876543210"));

        assert!(book.delete("Jane").is_some());
        assert!(book.delete("Jane").is_none());
        assert!(book.find("Jane").is_none());
        assert!(book.is_empty());
        assert_eq!(book.names().count(), 0);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = Directory::new();
        book.add(record("John", "1234567890"));
        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(book.find("John").unwrap().phones()[0], "1112223333");
    }

    #[test]
    fn test_directory_display() {
        let mut book = Directory::new();
        book.add(record("John", "1234567890"));
        book.add(record("Jane", "9876543210"));
        assert_eq!(
            book.to_string(),
            "John: Contact name: John, phones: 1234567890\n\
             Jane: Contact name: Jane, phones: 9876543210"
        );
    }

    #[test]
    fn test_empty_directory_display() {
        assert_eq!(Directory::new().to_string(), "");
    }

    #[test]
    fn test_directory_serialization_keeps_order() {
        let mut book = Directory::new();
        book.add(record("Zed", "1234567890"));
        book.add(record("Amy", "9876543210"));

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Zed","phones":["1234567890"]},{"name":"Amy","phones":["9876543210"]}]"#
        );

        let back: Directory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["Zed", "Amy"]);
    }
}
