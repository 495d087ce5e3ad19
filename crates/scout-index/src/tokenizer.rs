//! Text normalization for the index and the query path.
//!
//! The pipeline:
//! 1. Lower-case the whole input
//! 2. Split on runs of whitespace
//! 3. Drop tokens shorter than [`MIN_TERM_LENGTH`] characters
//!
//! Punctuation is kept, so `"acme,"` and `"acme"` are different terms.

use std::collections::HashSet;

/// Minimum token length, in characters, for a token to become a term.
pub const MIN_TERM_LENGTH: usize = 3;

/// Splits text into index terms.
///
/// Total: empty or whitespace-only input yields an empty vector.
///
/// ```
/// use scout_index::tokenize;
///
/// assert_eq!(tokenize("Lead  Scoring on CRM"), vec!["lead", "scoring", "crm"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TERM_LENGTH)
        .map(String::from)
        .collect()
}

/// Splits text into terms, keeping only the first occurrence of each.
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Acme Corp"), vec!["acme", "corp"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(tokenize("  lead\t\tscorer \n report "), vec![
            "lead", "scorer", "report"
        ]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("ma is an ERP app"), vec!["erp", "app"]);
        assert!(tokenize("ma").is_empty());
    }

    #[test]
    fn test_tokenize_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(tokenize("éé").is_empty());
        assert_eq!(tokenize("Été"), vec!["été"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("Q3-report, final"), vec!["q3-report,", "final"]);
    }

    #[test]
    fn test_tokenize_unique_preserves_first_occurrence() {
        assert_eq!(tokenize_unique("Acme acme ACME corp acme"), vec![
            "acme", "corp"
        ]);
    }
}
