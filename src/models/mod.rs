//! Data models for the address book.
//!
//! A [`Contact`] is assembled from the validated value objects in
//! [`crate::domain`]; [`ContactFields`] is its raw, unvalidated input form.

pub mod contact;

pub use contact::{Contact, ContactFields};
