//! Pluggable summarization for web fallback results
//!
//! The default strategy is a pure truncation heuristic, not
//! comprehension: split into sentences and keep the first few. A
//! stronger summarizer can be substituted without touching the cascade.

/// Text summarization capability
pub trait Summarizer: Send + Sync {
    /// Reduce `text` to at most `max_sentences` sentences
    fn summarize(&self, text: &str, max_sentences: usize) -> String;
}

/// Naive sentence-truncation summarizer.
///
/// Sentences end at `.`, `!`, or `?` followed by whitespace; the first
/// `max_sentences` are kept and re-joined with single spaces.
pub struct SentenceSummarizer;

impl Summarizer for SentenceSummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> String {
        split_sentences(text.trim())
            .into_iter()
            .take(max_sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split on terminal punctuation followed by whitespace, keeping the
/// punctuation with its sentence
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (idx, ch) in text.char_indices() {
        if after_terminal && ch.is_whitespace() {
            let sentence = text[start..idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = idx;
        }
        after_terminal = matches!(ch, '.' | '!' | '?');
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SENTENCES: &str = "One is first. Two follows! Three asks? Four continues. Five ends.";

    #[test]
    fn test_keeps_first_three_of_five_sentences() {
        let summary = SentenceSummarizer.summarize(FIVE_SENTENCES, 3);
        assert_eq!(summary, "One is first. Two follows! Three asks?");
    }

    #[test]
    fn test_short_text_is_kept_whole() {
        let summary = SentenceSummarizer.summarize("Just one sentence.", 3);
        assert_eq!(summary, "Just one sentence.");
    }

    #[test]
    fn test_empty_text_yields_empty_summary() {
        assert_eq!(SentenceSummarizer.summarize("", 3), "");
        assert_eq!(SentenceSummarizer.summarize("   ", 3), "");
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        // Decimal points and abbreviations without a following space stay
        // inside one sentence
        let sentences = split_sentences("Version 1.2 shipped. Done.");
        assert_eq!(sentences, vec!["Version 1.2 shipped.", "Done."]);
    }

    #[test]
    fn test_split_counts_sentences() {
        assert_eq!(split_sentences(FIVE_SENTENCES).len(), 5);
    }
}
