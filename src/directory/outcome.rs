//! Reported outcomes of address book operations.
//!
//! Duplicates, misses and unknown sort fields are normal results, not
//! errors. Each outcome is a plain value the caller can match on.

use super::sort::SortField;
use crate::models::Contact;
use std::fmt;

/// Result of [`Directory::add`](super::Directory::add).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The contact was appended.
    Added,

    /// A contact with the same first and last name already exists; nothing changed.
    Duplicate { full_name: String },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "Contact added successfully!"),
            Self::Duplicate { full_name } => write!(f, "Contact '{}' already exists!", full_name),
        }
    }
}

/// Result of [`Directory::remove`](super::Directory::remove).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first matching contact, now removed.
    Removed(Contact),

    /// No contact answers to the name; nothing changed.
    NotFound { name: String },
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The removed contact, if any.
    pub fn removed(self) -> Option<Contact> {
        match self {
            Self::Removed(contact) => Some(contact),
            Self::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(contact) => write!(f, "Contact '{}' deleted", contact.full_name()),
            Self::NotFound { name } => write!(f, "Contact '{}' not found", name),
        }
    }
}

/// Result of [`Directory::sort_by_field`](super::Directory::sort_by_field).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted(SortField),

    /// The field name was not recognised; the order is unchanged.
    InvalidField { field: String },
}

impl SortOutcome {
    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted(_))
    }
}

impl fmt::Display for SortOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorted(field) => write!(f, "Contacts sorted by {}", field),
            Self::InvalidField { field } => write!(
                f,
                "Invalid sorting field '{}'. Choose 'city', 'state', 'zip' or 'name'.",
                field
            ),
        }
    }
}
