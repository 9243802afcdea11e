//! Single-pass linguistic counters shared by every formula.

use serde::Serialize;

use super::syllables;
use super::vocabulary;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Whitespace-split tokens containing at least one alphanumeric.
    pub words: usize,
    /// Runs of `.` `!` `?` delimit sentences; at least 1 if any words.
    pub sentences: usize,
    pub syllables: usize,
    /// Alphabetic characters across all words.
    pub letters: usize,
    /// Alphanumeric characters across all words.
    pub chars: usize,
    /// Words with three or more syllables.
    pub polysyllables: usize,
    /// Words with two or more syllables not on the easy-word list.
    pub difficult_words: usize,
}

impl TextStats {
    pub fn analyze(text: &str) -> Self {
        let mut stats = TextStats::default();

        for token in text.split_whitespace() {
            if !token.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            stats.words += 1;
            stats.letters += token.chars().filter(|c| c.is_alphabetic()).count();
            stats.chars += token.chars().filter(|c| c.is_alphanumeric()).count();

            let syllables = syllables::count(token);
            stats.syllables += syllables;
            if syllables >= 3 {
                stats.polysyllables += 1;
            }
            if syllables >= 2 && !vocabulary::is_familiar(token) {
                stats.difficult_words += 1;
            }
        }

        stats.sentences = sentence_count(text);
        if stats.words > 0 && stats.sentences == 0 {
            stats.sentences = 1;
        }
        stats
    }
}

fn sentence_count(text: &str) -> usize {
    text.split(|c| matches!(c, '.' | '!' | '?'))
        .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
        .count()
}
