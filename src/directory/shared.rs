//! Thread-safe handle to a directory.

use super::address_book::Directory;
use super::listing::Listing;
use super::outcome::{AddOutcome, RemoveOutcome, SortOutcome};
use crate::models::Contact;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A directory behind a single lock.
///
/// Each method holds the lock for its whole check-then-mutate sequence, so
/// concurrent `add` calls can never insert the same person twice. Clones
/// share the same directory.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, contact: Contact) -> AddOutcome {
        self.lock().add(contact)
    }

    pub fn remove(&self, name: &str) -> RemoveOutcome {
        self.lock().remove(name)
    }

    /// Owned copy of the first contact answering to `name`.
    pub fn find_by_name(&self, name: &str) -> Option<Contact> {
        self.lock().find_by_name(name).cloned()
    }

    pub fn count(&self) -> usize {
        self.lock().count()
    }

    pub fn sort_by_field(&self, field: &str) -> SortOutcome {
        self.lock().sort_by_field(field)
    }

    pub fn display(&self) -> Listing {
        self.lock().display()
    }

    /// Run `f` against the directory while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Directory) -> R) -> R {
        let guard = self.lock();
        f(&guard)
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        // Directory operations never leave partial state, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }
}
