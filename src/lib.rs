//! Address Book - an in-memory contact directory with validated entries.
//!
//! Contacts are validated field by field when they are built, then kept in
//! an ordered, duplicate-free [`Directory`] that supports lookup, grouping,
//! counting, sorting and fuzzy name search.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, address parts, zip, phone, email)
//! - **models**: The [`Contact`] record and its raw input form
//! - **directory**: The address book, its reported outcomes and a locked shared handle
//! - **matching**: Fuzzy name matching used by [`Directory::search`]
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//!
//! # Example
//!
//! ```
//! use address_book::{AddOutcome, Contact, Directory};
//!
//! let mut book = Directory::new();
//! let john = Contact::new(
//!     "John", "Doe", "456 Avenue", "Delhi", "Delhi",
//!     "110001", "9988776655", "john.doe@example.com",
//! ).unwrap();
//!
//! assert_eq!(book.add(john.clone()), AddOutcome::Added);
//! assert!(book.add(john).is_duplicate());
//! assert_eq!(book.count(), 1);
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use config::Config;
pub use directory::{
    AddOutcome, Directory, GroupMap, Listing, RemoveOutcome, SharedDirectory, SortField,
    SortOutcome,
};
pub use domain::{ContactField, ValidationError};
pub use error::ConfigError;
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{Contact, ContactFields};
