use proptest::prelude::*;
use prosegate::normalize::normalize;
use prosegate::score_document;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The normalizer must degrade gracefully on arbitrary input, never
    // panic, and never leave a blank-line run behind.
    #[test]
    fn normalize_never_panics_or_leaves_blank_lines(input in ".{0,400}") {
        let out = normalize(&input);
        prop_assert!(!out.contains("\n\n"));
    }

    #[test]
    fn score_is_finite_and_deterministic(input in ".{0,400}") {
        let first = score_document(&input);
        let second = score_document(&input);
        prop_assert!(first.is_finite());
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    // Whatever surrounds it, a fenced block's payload never reaches
    // the normalized prose.
    #[test]
    fn fenced_payload_never_leaks(
        before in "[a-z ]{0,40}",
        payload in "[a-z ]{0,40}",
        after in "[a-z ]{0,40}",
    ) {
        let md = format!("{before}.\n\n```\nXYZZY {payload}\n```\n\n{after}.");
        prop_assert!(!normalize(&md).contains("XYZZY"));
    }

    // Pure prose input should survive normalization: every word of the
    // input is still present in the output.
    #[test]
    fn prose_words_survive(words in proptest::collection::vec("[a-z]{1,8}", 1..20)) {
        let sentence = format!("{}.", words.join(" "));
        let out = normalize(&sentence);
        for word in &words {
            prop_assert!(out.contains(word.as_str()));
        }
    }
}
