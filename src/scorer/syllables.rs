//! Vowel-group syllable heuristic.

/// Count syllables in a single word. Non-alphabetic characters are
/// ignored; every word has at least one syllable.
pub fn count(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    if cleaned.is_empty() {
        return 0;
    }

    let bytes = cleaned.as_bytes();
    let is_vowel = |c: u8| matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y');

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in bytes {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    // Silent trailing 'e' (make, style) -- but consonant + "le" endings
    // (apple, table) keep their final syllable.
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == b'e' && !is_vowel(bytes[n - 2]) && groups > 1 {
        let keeps_le = n >= 3 && bytes[n - 2] == b'l' && !is_vowel(bytes[n - 3]);
        if !keeps_le {
            groups -= 1;
        }
    }

    groups.max(1)
}
