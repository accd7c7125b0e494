//! Sort keys and string collation.

use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fields the address book can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    City,
    State,
    Zip,
    /// Full name ("First Last").
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Name => "name",
        }
    }

    /// Compare two contacts on this field.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::City => collate(a.city(), b.city()),
            Self::State => collate(a.state(), b.state()),
            Self::Zip => collate(a.zip(), b.zip()),
            Self::Name => collate(&a.full_name(), &b.full_name()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort field name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            "name" => Ok(Self::Name),
            _ => Err(UnknownSortField(s.to_string())),
        }
    }
}

/// Human-oriented string ordering.
///
/// Compares a primary key with accents and case removed, so "Évora" sorts
/// next to "Evora" ahead of "Faro". Ties are broken by accents, then with
/// lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased base letters: NFD decomposition with combining marks dropped.
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
