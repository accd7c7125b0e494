//! Address Book - demo entry point
//!
//! Builds a small address book, then prints listings, sorted views,
//! groupings and a fuzzy search. Listings go to stdout; logs go to stderr.

use address_book::{Config, Contact, Directory, SortField};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so stdout carries just the listings)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        max_results = config.max_match_results,
        min_confidence = config.match_confidence_threshold,
        "Configuration loaded"
    );

    let mut book = Directory::new();
    for contact in sample_contacts()? {
        let outcome = book.add(contact);
        if outcome.is_duplicate() {
            warn!("{}", outcome);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    book.display().render(&mut out)?;

    for field in [SortField::City, SortField::State, SortField::Zip] {
        book.sort_by(field);
        writeln!(out, "\nContacts sorted by {}:", field)?;
        book.display().render(&mut out)?;
    }

    writeln!(out, "\nContacts grouped by city:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&book.group_by_city())?)?;

    writeln!(out, "\nContacts per state:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&book.count_by_state())?)?;

    let matcher = config.matcher();
    writeln!(out, "\nSearch results for 'Doe':")?;
    for result in book.search("Doe", &matcher) {
        writeln!(
            out,
            "{} ({}% {:?})",
            result.contact.full_name(),
            result.confidence,
            result.match_type
        )?;
    }

    match book.remove("Alice") {
        outcome if outcome.is_removed() => writeln!(out, "\n{}", outcome)?,
        outcome => error!("{}", outcome),
    }
    writeln!(out, "Contacts remaining: {}", book.count())?;

    Ok(())
}

fn sample_contacts() -> Result<Vec<Contact>> {
    let contacts = vec![
        Contact::new(
            "Samridhi",
            "Singh",
            "123 Street",
            "Orai",
            "Uttar Pradesh",
            "250002",
            "9876543210",
            "samridhi@example.com",
        )?,
        Contact::new(
            "John",
            "Doe",
            "456 Avenue",
            "Delhi",
            "Delhi",
            "110001",
            "9988776655",
            "john.doe@example.com",
        )?,
        Contact::new(
            "Jane",
            "Doe",
            "789 Road",
            "Orai",
            "Uttar Pradesh",
            "250003",
            "9123456789",
            "jane.doe@example.com",
        )?,
        Contact::new(
            "Alice",
            "Brown",
            "321 Street",
            "Mumbai",
            "Maharashtra",
            "400001",
            "9234567890",
            "alice.brown@example.com",
        )?,
    ];
    Ok(contacts)
}
