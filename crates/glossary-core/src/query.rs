//! Query normalization and compound query splitting
//!
//! Normalization feeds the exact/partial lookup tiers; the semantic and
//! web tiers use the original query because the embedding model and web
//! search benefit from natural phrasing.

/// Filler phrases stripped wherever they occur as substrings, in this
/// order ("definition of" must precede "define")
pub const FILLER_PHRASES: &[&str] = &[
    "what is",
    "explain",
    "tell me about",
    "give me info about",
    "info of",
    "definition of",
    "define",
    "meaning of",
    "describe",
];

/// Narrower filler list applied before splitting a compound query
const COMPOUND_FILLERS: &[&str] = &["what is", "explain", "definition of"];

/// Lowercase the query and strip filler phrases
pub fn normalize(query: &str) -> String {
    let mut text = query.to_lowercase();
    for phrase in FILLER_PHRASES {
        text = text.replace(phrase, "");
    }
    text.trim().to_string()
}

/// Split a compound query into independent sub-queries.
///
/// A query is compound if it contains the literal `" and "`, a comma,
/// or a semicolon. Fragments are lowercased, stripped of fillers,
/// trimmed, and re-capitalized. A split that yields no fragments (e.g.
/// a query of only separators) degenerates to the original trimmed
/// query as a single item, so callers never see an empty sequence.
pub fn split_compound(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    let compound =
        trimmed.contains(" and ") || trimmed.contains(',') || trimmed.contains(';');
    if !compound {
        return vec![trimmed.to_string()];
    }

    let mut text = trimmed.to_lowercase();
    for phrase in COMPOUND_FILLERS {
        text = text.replace(phrase, "");
    }

    let fragments: Vec<String> = text
        .split([',', ';'])
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize_first)
        .collect();

    if fragments.is_empty() {
        vec![trimmed.to_string()]
    } else {
        fragments
    }
}

fn capitalize_first(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
