//! Exact and partial lookup table derived from the corpus
//!
//! Built in memory at engine start, never persisted. Two keys are
//! registered per entry: the full lowercased term, and the term with any
//! parenthetical suffix stripped. Key iteration order is insertion
//! order, i.e. corpus document order, which the partial-match tier
//! depends on.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::entry::GlossaryEntry;

lazy_static! {
    /// Parenthetical suffix like " (NAV)" anywhere in a term
    static ref PAREN_SUFFIX: Regex = Regex::new(r"\s*\(.*?\)").unwrap();
}

/// Normalized term -> definition map with stable key order
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    keys: Vec<String>,
    map: HashMap<String, String>,
}

impl LookupTable {
    /// Build the table from entries in corpus order.
    ///
    /// The full-term key always takes the entry's definition (a repeated
    /// term overwrites the value but keeps its original position). The
    /// suffix-stripped key is only registered if no earlier entry
    /// claimed it.
    pub fn from_entries(entries: &[GlossaryEntry]) -> Self {
        let mut table = Self::default();

        for entry in entries {
            let full = entry.term.trim().to_lowercase();
            table.put(full, entry.definition.clone());

            let main = PAREN_SUFFIX
                .replace_all(&entry.term, "")
                .trim()
                .to_lowercase();
            if !main.is_empty() {
                table.put_if_absent(main, entry.definition.clone());
            }
        }

        table
    }

    fn put(&mut self, key: String, definition: String) {
        if self.map.insert(key.clone(), definition).is_none() {
            self.keys.push(key);
        }
    }

    fn put_if_absent(&mut self, key: String, definition: String) {
        if !self.map.contains_key(&key) {
            self.keys.push(key.clone());
            self.map.insert(key, definition);
        }
    }

    /// Exact lookup of a normalized query
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// First key (in corpus order) that occurs as a substring of the
    /// query. Intentionally first-match, not best-match.
    pub fn first_substring_of(&self, query: &str) -> Option<(&str, &str)> {
        for key in &self.keys {
            if query.contains(key.as_str()) {
                if let Some(definition) = self.map.get(key) {
                    return Some((key, definition));
                }
            }
        }
        None
    }

    /// Longest key that occurs as a substring of the query; ties go to
    /// the earlier key. The configurable alternative to first-match.
    pub fn longest_substring_of(&self, query: &str) -> Option<(&str, &str)> {
        let mut best: Option<&String> = None;
        for key in &self.keys {
            if query.contains(key.as_str()) && best.map_or(true, |b| key.len() > b.len()) {
                best = Some(key);
            }
        }
        let key = best?;
        self.map
            .get(key)
            .map(|definition| (key.as_str(), definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
