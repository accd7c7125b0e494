//! Directory operations.

use super::group_map::GroupMap;
use super::listing::Listing;
use super::outcome::{AddOutcome, RemoveOutcome, SortOutcome};
use super::sort::SortField;
use crate::matching::{ContactMatcher, MatchResult};
use crate::models::Contact;
use tracing::{debug, info};

/// Ordered, duplicate-free collection of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `contact` unless someone with the same name is already present.
    pub fn add(&mut self, contact: Contact) -> AddOutcome {
        if self.contacts.iter().any(|c| c.is_same_person(&contact)) {
            let full_name = contact.full_name();
            debug!(contact = %full_name, "Duplicate contact rejected");
            return AddOutcome::Duplicate { full_name };
        }

        info!(contact = %contact.full_name(), "Contact added");
        self.contacts.push(contact);
        AddOutcome::Added
    }

    /// Remove the first contact whose first or last name equals `name`, ignoring case.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        match self.position_by_name(name) {
            Some(index) => {
                let contact = self.contacts.remove(index);
                info!(contact = %contact.full_name(), "Contact deleted");
                RemoveOutcome::Removed(contact)
            }
            None => {
                debug!(name, "No contact to delete");
                RemoveOutcome::NotFound {
                    name: name.to_string(),
                }
            }
        }
    }

    /// First contact whose first or last name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.answers_to(name))
    }

    /// All contacts in `city`, ignoring case, in directory order.
    pub fn find_by_city(&self, city: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.in_city(city)).collect()
    }

    /// All contacts in `state`, ignoring case, in directory order.
    pub fn find_by_state(&self, state: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.in_state(state)).collect()
    }

    /// Display strings grouped by city as stored, in first-seen order.
    pub fn group_by_city(&self) -> GroupMap<Vec<String>> {
        self.group_by(Contact::city)
    }

    /// Display strings grouped by state as stored, in first-seen order.
    pub fn group_by_state(&self) -> GroupMap<Vec<String>> {
        self.group_by(Contact::state)
    }

    /// Number of contacts per city, in first-seen order.
    pub fn count_by_city(&self) -> GroupMap<usize> {
        self.count_by(Contact::city)
    }

    /// Number of contacts per state, in first-seen order.
    pub fn count_by_state(&self) -> GroupMap<usize> {
        self.count_by(Contact::state)
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Stable sort on `field`.
    pub fn sort_by(&mut self, field: SortField) {
        self.contacts.sort_by(|a, b| field.compare(a, b));
        info!(field = %field, "Contacts sorted");
    }

    /// Sort on a field given by name (`city`, `state`, `zip` or `name`).
    ///
    /// Names must match exactly; anything else leaves the order untouched.
    pub fn sort_by_field(&mut self, field: &str) -> SortOutcome {
        match field.parse::<SortField>() {
            Ok(parsed) => {
                self.sort_by(parsed);
                SortOutcome::Sorted(parsed)
            }
            Err(_) => {
                debug!(field, "Invalid sort field");
                SortOutcome::InvalidField {
                    field: field.to_string(),
                }
            }
        }
    }

    /// Snapshot of every contact's display string, in current order.
    pub fn display(&self) -> Listing {
        if self.contacts.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(self.contacts.iter().map(Contact::display_string).collect())
    }

    /// Fuzzy search on first, last and full names.
    pub fn search(&self, query: &str, matcher: &ContactMatcher) -> Vec<MatchResult<'_>> {
        let results = matcher.find_matches(query, &self.contacts);
        debug!(query, results = results.len(), "Name search");
        results
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.answers_to(name))
    }

    fn group_by(&self, key: impl Fn(&Contact) -> &str) -> GroupMap<Vec<String>> {
        let mut groups = GroupMap::new();
        for contact in &self.contacts {
            groups
                .get_or_insert_with(key(contact), Vec::new)
                .push(contact.display_string());
        }
        groups
    }

    fn count_by(&self, key: impl Fn(&Contact) -> &str) -> GroupMap<usize> {
        let mut counts = GroupMap::new();
        for contact in &self.contacts {
            *counts.get_or_insert_with(key(contact), || 0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
