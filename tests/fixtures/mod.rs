//! Test fixtures and sample data for integration tests.
//!
//! The four sample contacts mirror a small address book spread over three
//! cities and three states.

#![allow(dead_code)]

use address_book::{Contact, ContactFields, Directory};

/// Raw fields for a valid contact; tweak one field to test a failure.
pub fn sample_fields() -> ContactFields {
    ContactFields {
        first_name: "Samridhi".to_string(),
        last_name: "Singh".to_string(),
        address: "123 Street".to_string(),
        city: "Orai".to_string(),
        state: "Uttar Pradesh".to_string(),
        zip: "250002".to_string(),
        phone: "9876543210".to_string(),
        email: "samridhi@example.com".to_string(),
    }
}

/// Create a valid contact with the given name, city, state and zip.
pub fn sample_contact(first: &str, last: &str, city: &str, state: &str, zip: &str) -> Contact {
    Contact::new(
        first,
        last,
        "221 Baker Street",
        city,
        state,
        zip,
        "9123456789",
        "person@example.com",
    )
    .expect("fixture contact must be valid")
}

/// Samridhi Singh, John Doe, Jane Doe and Alice Brown, in that order.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        sample_contact("Samridhi", "Singh", "Orai", "Uttar Pradesh", "250002"),
        sample_contact("John", "Doe", "Delhi", "Delhi", "110001"),
        sample_contact("Jane", "Doe", "Orai", "Uttar Pradesh", "250003"),
        sample_contact("Alice", "Brown", "Mumbai", "Maharashtra", "400001"),
    ]
}

/// A directory holding [`sample_contacts`].
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    for contact in sample_contacts() {
        assert!(directory.add(contact).is_added());
    }
    directory
}
