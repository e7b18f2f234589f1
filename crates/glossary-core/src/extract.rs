//! Source document line extraction
//!
//! Thin wrapper over `pdf-extract`. The raw extraction call is an
//! external collaborator; everything here just turns its output into the
//! ordered, trimmed, non-empty line sequence the corpus builder expects.

use crate::error::{GlossaryError, Result};

/// Extract glossary lines from an in-memory PDF.
///
/// Lines come back in page order, trimmed, with empty lines dropped.
pub fn extract_lines(bytes: &[u8]) -> Result<Vec<String>> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| GlossaryError::Extraction(e.to_string()))?;
    Ok(lines_from_text(&text))
}

/// Split raw extracted text into trimmed, non-empty lines
pub fn lines_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed_and_non_empty() {
        let lines = lines_from_text("  Inflation  \n\n   \nA rise in prices.\n");
        assert_eq!(lines, vec!["Inflation", "A rise in prices."]);
    }

    #[test]
    fn test_line_order_is_preserved() {
        let lines = lines_from_text("First\nSecond\nThird");
        assert_eq!(lines, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(lines_from_text("").is_empty());
        assert!(lines_from_text("   \n  \n").is_empty());
    }
}
