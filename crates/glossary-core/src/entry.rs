//! Glossary entry model and term/definition extraction
//!
//! A glossary page alternates short term headers with longer definition
//! body text. The classifier decides per line which side it is on, and
//! the grouping pass folds each header plus its following body lines
//! into one [`GlossaryEntry`].

use serde::{Deserialize, Serialize};

/// Punctuation that marks a line as definition body, not a term header
const BODY_PUNCTUATION: &str = ".?!;:,";

/// Maximum whitespace-delimited words in a term header
const MAX_TERM_WORDS: usize = 6;

/// A single term/definition pair, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The header line as extracted, including any parenthetical suffix
    /// (e.g. "Net Asset Value (NAV)")
    pub term: String,
    /// Concatenated body text up to the next term header; never empty
    pub definition: String,
}

impl GlossaryEntry {
    /// The string that gets embedded and indexed for this entry.
    ///
    /// Term and definition joined by a single newline, so a semantic hit
    /// can be split back on the first newline.
    pub fn embedding_text(&self) -> String {
        format!("{}\n{}", self.term, self.definition)
    }
}

/// Classify a line as a term header or definition body.
///
/// A term header is short, starts with an uppercase letter, and does not
/// end in sentence punctuation. Single uppercase characters are stray
/// page markers, not terms.
pub fn is_term_line(line: &str) -> bool {
    let mut chars = line.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    // Single uppercase character: a page section marker like "A"
    if chars.next().is_none() && first.is_uppercase() {
        return false;
    }

    // Definitions end in punctuation, term headers do not
    if line
        .chars()
        .last()
        .is_some_and(|c| BODY_PUNCTUATION.contains(c))
    {
        return false;
    }

    if line.split_whitespace().count() > MAX_TERM_WORDS {
        return false;
    }

    first.is_alphabetic() && first.is_uppercase()
}

/// Group extracted lines into term/definition entries.
///
/// Scans left to right: each accepted term line consumes all following
/// rejected lines as its definition body, joined with single spaces. A
/// term with no body (immediately followed by another term or end of
/// input) produces no entry. Rejected lines before the first term are
/// skipped.
pub fn parse_entries(lines: &[String]) -> Vec<GlossaryEntry> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_term_line(&lines[i]) {
            i += 1;
            continue;
        }

        let term = lines[i].clone();
        let mut body = Vec::new();
        let mut j = i + 1;
        while j < lines.len() && !is_term_line(&lines[j]) {
            body.push(lines[j].as_str());
            j += 1;
        }

        let definition = body.join(" ").trim().to_string();
        if !definition.is_empty() {
            entries.push(GlossaryEntry { term, definition });
        }
        i = j;
    }

    entries
}
