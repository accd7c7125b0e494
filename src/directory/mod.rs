//! The address book: an ordered collection of validated contacts.
//!
//! [`Directory`] holds contacts in insertion order and never contains two
//! contacts with the same first and last name (ignoring case). Expected
//! outcomes such as duplicates or misses are reported through the values in
//! [`outcome`], never as errors.

mod address_book;
pub mod group_map;
pub mod listing;
pub mod outcome;
pub mod shared;
pub mod sort;

pub use address_book::Directory;
pub use group_map::GroupMap;
pub use listing::Listing;
pub use outcome::{AddOutcome, RemoveOutcome, SortOutcome};
pub use shared::SharedDirectory;
pub use sort::{collate, SortField, UnknownSortField};
