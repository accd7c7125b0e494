//! Fuzzy name matching for contact search.
//!
//! This module scores free-text name queries against the first, last and
//! full names of contacts.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
