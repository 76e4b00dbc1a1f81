//! Directory handle for concurrent hosts.
//!
//! Every operation takes the same lock, so the birthday scan never sees a
//! half-applied add or delete.

use super::{Directory, UpcomingBirthday};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable, thread-safe handle to one [`Directory`].
///
/// Clones share the same directory.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    // Records hold no cross-entry invariants, so a panicked holder cannot
    // leave the directory inconsistent.
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, record: ContactRecord) -> Option<ContactRecord> {
        self.lock().add(record)
    }

    /// Clone of the record with this name.
    pub fn find(&self, name: &str) -> Option<ContactRecord> {
        self.lock().find(name).cloned()
    }

    pub fn delete(&self, name: &str) -> Option<ContactRecord> {
        self.lock().delete(name)
    }

    /// Run `f` on the named record while holding the lock.
    ///
    /// Returns `None` if there is no such record.
    pub fn with_record<T>(&self, name: &str, f: impl FnOnce(&mut ContactRecord) -> T) -> Option<T> {
        self.lock().find_mut(name).map(f)
    }

    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.lock().upcoming_birthdays(window_days, today)
    }

    /// The directory listing, one record per line.
    pub fn render(&self) -> String {
        self.lock().to_string()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the whole directory at this instant.
    pub fn snapshot(&self) -> Directory {
        self.lock().clone()
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self::new(directory)
    }
}
