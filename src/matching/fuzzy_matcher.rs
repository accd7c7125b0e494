//! Fuzzy matching implementation for contact search.
//!
//! This module provides name matching with:
//! - Exact (case-insensitive) matching on first, last or full name
//! - Substring matching with length-scaled confidence
//! - Typo-tolerant matching using Levenshtein distance
//! - Confidence scoring (0-100 scale)

use crate::models::Contact;

/// Default number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default minimum confidence for a result to be kept.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 30;

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub contact: &'a Contact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals the first, last or full name
    Exact,

    /// Query is contained in a name
    Partial,

    /// Query is within edit distance of a name
    Fuzzy,
}

/// Contact matcher with result limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMatcher {
    max_results: usize,
    min_confidence: u8,
}

impl ContactMatcher {
    /// Create a matcher. `min_confidence` is clamped to 100.
    pub fn new(max_results: usize, min_confidence: u8) -> Self {
        Self {
            max_results,
            min_confidence: min_confidence.min(100),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn min_confidence(&self) -> u8 {
        self.min_confidence
    }

    /// Find contacts whose names match `query`.
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then full name, limited
    /// to `max_results`. An empty query matches nothing.
    pub fn find_matches<'a, I>(&self, query: &str, contacts: I) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let query = Self::normalize_name(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = contacts
            .into_iter()
            .filter_map(|contact| {
                let (confidence, match_type) = Self::score_contact(&query, contact)?;
                (confidence >= self.min_confidence).then_some(MatchResult {
                    contact,
                    confidence,
                    match_type,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.full_name().cmp(&b.contact.full_name()))
        });
        results.truncate(self.max_results);

        results
    }

    /// Best score across the contact's full, first and last names.
    fn score_contact(query: &str, contact: &Contact) -> Option<(u8, MatchType)> {
        [
            contact.full_name(),
            contact.first_name().to_string(),
            contact.last_name().to_string(),
        ]
        .iter()
        .filter_map(|name| Self::score_name(query, &Self::normalize_name(name)))
        .max_by_key(|(confidence, _)| *confidence)
    }

    /// Score one normalized query against one normalized name.
    fn score_name(query: &str, target: &str) -> Option<(u8, MatchType)> {
        if target.is_empty() {
            return None;
        }

        if query == target {
            return Some((100, MatchType::Exact));
        }

        // Contains match (substring), 60-95 depending on coverage
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return Some(((35.0 * ratio + 60.0) as u8, MatchType::Partial));
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return None;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        Some(((similarity * 85.0) as u8, MatchType::Fuzzy))
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ContactMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new(
            first,
            last,
            "123 Street",
            "Orai",
            "Uttar Pradesh",
            "250002",
            "9876543210",
            "someone@example.com",
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(ContactMatcher::normalize_name("  John   DOE "), "john doe");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(ContactMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_exact_full_name_match() {
        let contacts = vec![contact("John", "Doe"), contact("Jane", "Doe")];
        let matcher = ContactMatcher::default();

        let matches = matcher.find_matches("john doe", &contacts);
        assert_eq!(matches[0].contact.full_name(), "John Doe");
        assert_eq!(matches[0].confidence, 100);
        assert_eq!(matches[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_last_name_matches_everyone_sharing_it() {
        let contacts = vec![
            contact("John", "Doe"),
            contact("Alice", "Brown"),
            contact("Jane", "Doe"),
        ];
        let matcher = ContactMatcher::default();

        let matches = matcher.find_matches("Doe", &contacts);
        let names: Vec<String> = matches.iter().map(|m| m.contact.full_name()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Doe"]);
        assert!(matches.iter().all(|m| m.confidence == 100));
    }

    #[test]
    fn test_typo_tolerance() {
        let contacts = vec![contact("Samridhi", "Singh")];
        let matcher = ContactMatcher::default();

        let matches = matcher.find_matches("Samridi", &contacts);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].confidence < 100);
    }

    #[test]
    fn test_partial_match() {
        let contacts = vec![contact("Samridhi", "Singh")];
        let matcher = ContactMatcher::default();

        let matches = matcher.find_matches("Sam", &contacts);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Partial);
        assert!(matches[0].confidence >= 60);
    }

    #[test]
    fn test_unrelated_query_no_match() {
        let contacts = vec![contact("John", "Doe")];
        let matcher = ContactMatcher::default();
        assert!(matcher.find_matches("Zebediah", &contacts).is_empty());
        assert!(matcher.find_matches("   ", &contacts).is_empty());
    }

    #[test]
    fn test_limits_and_threshold() {
        let contacts = vec![
            contact("John", "Doe"),
            contact("Jane", "Doe"),
            contact("Jack", "Doe"),
        ];

        let matcher = ContactMatcher::new(2, 0);
        assert_eq!(matcher.find_matches("Doe", &contacts).len(), 2);

        let strict = ContactMatcher::new(10, 100);
        assert!(strict.find_matches("Jon", &contacts).is_empty());
    }

    #[test]
    fn test_min_confidence_clamped() {
        assert_eq!(ContactMatcher::new(5, 250).min_confidence(), 100);
    }
}
