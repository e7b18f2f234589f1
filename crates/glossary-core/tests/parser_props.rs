//! Property-based tests for the term-line classifier and the compound
//! query splitter.

use proptest::prelude::*;

use glossary_core::entry::{is_term_line, parse_entries};
use glossary_core::query::split_compound;

fn arbitrary_line() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 (),.?!;:]{1,60}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn accepted_term_lines_satisfy_every_rule(line in arbitrary_line()) {
        if is_term_line(&line) {
            prop_assert!(line.split_whitespace().count() <= 6);
            let first = line.chars().next().unwrap();
            prop_assert!(first.is_alphabetic() && first.is_uppercase());
            let last = line.chars().last().unwrap();
            prop_assert!(!".?!;:,".contains(last));
        }
    }

    #[test]
    fn lines_ending_in_punctuation_are_rejected(
        body in "[A-Za-z ]{1,30}",
        terminal in prop::sample::select(vec!['.', '?', '!', ';', ':', ',']),
    ) {
        let line = format!("{body}{terminal}");
        prop_assert!(!is_term_line(&line));
    }

    #[test]
    fn every_parsed_entry_has_a_body_and_a_valid_term(
        lines in prop::collection::vec(arbitrary_line(), 0..40),
    ) {
        for entry in parse_entries(&lines) {
            prop_assert!(!entry.definition.is_empty());
            prop_assert!(is_term_line(&entry.term));
        }
    }

    #[test]
    fn compound_split_is_never_empty(query in "[a-zA-Z ,;]{0,60}") {
        let fragments = split_compound(&query);
        prop_assert!(!fragments.is_empty());
        // A trimmed non-empty query never produces empty fragments
        for fragment in &fragments {
            if !query.trim().is_empty() {
                prop_assert!(!fragment.is_empty());
            }
        }
    }
}
