//! Markdown-to-prose normalization.
//!
//! Converts raw Markdown into plain text suitable for sentence-based
//! readability metrics. Structural elements (tables, headings, lists,
//! blockquotes, images, fenced code) carry no prose and are dropped
//! wholesale; link labels are kept as visible text.

mod filter;

use once_cell::sync::Lazy;
use regex::Regex;

// Fenced code blocks are stripped from the raw source before parsing,
// so an unclosed or oddly-indented fence never leaks code into prose.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\n)\s*```[^\n]*\n(?s:.*?)\n\s*```").unwrap());

// Template-tag directives ({% ... %}), possibly spanning lines.
static TEMPLATE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{%(?s:.*?)%\}").unwrap());

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

// A newline right after an alphabetic character is a manual line wrap
// inside a paragraph. Must run after NEWLINE_RUNS, or a paragraph
// boundary could be swallowed into the wrap fix.
static WRAPPED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])\n").unwrap());

/// Convert Markdown source to plain prose text.
///
/// Pure and deterministic; malformed Markdown degrades to plain text
/// rather than erroring.
pub fn normalize(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let stripped = FENCED_BLOCK.replace_all(markdown, "\n");
    let prose = filter::extract_prose(&stripped);
    let prose = TEMPLATE_TAG.replace_all(&prose, "");
    let prose = NEWLINE_RUNS.replace_all(&prose, "\n");
    let prose = WRAPPED_LINE.replace_all(&prose, "$1 ");
    prose.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_at_document_start_is_stripped() {
        let md = "```rust\nfn main() {}\n```\n\nProse afterwards.";
        let out = normalize(md);
        assert!(!out.contains("fn main"));
        assert!(out.contains("Prose afterwards."));
    }

    #[test]
    fn fence_without_language_tag_is_stripped() {
        let md = "Before.\n\n```\nlet x = 1;\n```\n\nAfter.";
        let out = normalize(md);
        assert!(!out.contains("let x"));
        assert!(out.contains("Before."));
        assert!(out.contains("After."));
    }

    #[test]
    fn template_tags_are_removed() {
        let out = normalize("Keep this. {% tag\nspanning lines %} And this.");
        assert!(!out.contains('%'));
        assert!(out.contains("Keep this."));
        assert!(out.contains("And this."));
    }

    #[test]
    fn wrapped_lines_become_spaces_but_boundaries_survive() {
        let out = normalize("A sentence that\nwraps here.\n\nNext paragraph.");
        assert!(out.contains("A sentence that wraps here."));
        assert!(out.contains("\nNext paragraph."));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }
}
