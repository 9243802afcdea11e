//! Embedded easy-word list for the Dale-Chall difficult-word lookup.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static EASY_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    include_str!("../../data/easy_words.txt")
        .lines()
        .map(|line| {
            line.trim_matches(|c: char| !c.is_alphanumeric())
                .to_ascii_lowercase()
        })
        .filter(|line| !line.is_empty())
        .collect()
});

/// True if the word (case-insensitive, surrounding punctuation ignored)
/// is on the easy-word list.
pub fn is_familiar(word: &str) -> bool {
    let cleaned = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_ascii_lowercase();
    EASY_WORDS.contains(cleaned.as_str())
}

#[cfg(test)]
mod tests {
    use super::is_familiar;

    #[test]
    fn common_words_are_familiar() {
        assert!(is_familiar("about"));
        assert!(is_familiar("Garden"));
        assert!(is_familiar("water,"));
        assert!(is_familiar("understand"));
        assert!(is_familiar("together"));
    }

    #[test]
    fn capitalized_list_entries_match_lowercase_queries() {
        assert!(is_familiar("i"));
        assert!(is_familiar("american"));
    }

    #[test]
    fn jargon_is_unfamiliar() {
        assert!(!is_familiar("heuristic"));
        assert!(!is_familiar("orchestration"));
    }
}
