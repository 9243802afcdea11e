//! Event-stream filter over the parsed Markdown tree.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Containers whose entire subtree is non-prose. Their inner text is
/// dropped, not converted.
fn is_stripped(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::List(_)
            | Tag::Item
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell
            | Tag::Image { .. }
            | Tag::CodeBlock(CodeBlockKind::Fenced(_))
    )
}

/// Walk the Markdown event stream, drop non-prose subtrees, unwrap link
/// labels, and join the surviving blocks with newlines. Each block's
/// text is trimmed as a unit so inline markup never glues words.
///
/// Raw HTML passes through as prose with its tag markup removed; only
/// `<script>` subtrees are dropped along with their contents.
pub(crate) fn extract_prose(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);

    let mut out = String::new();
    let mut block = String::new();
    // Depth of the innermost stripped container; 0 means we are in prose.
    let mut skip = 0usize;
    // Script elements span multiple raw-HTML events.
    let mut in_script = false;

    for event in parser {
        match event {
            Event::Start(tag) => {
                if skip > 0 {
                    skip += 1;
                } else if is_stripped(&tag) {
                    skip = 1;
                }
                // Links, emphasis, strong, HTML blocks: inner text flows through.
            }
            Event::End(end) => {
                if skip > 0 {
                    skip -= 1;
                } else if matches!(
                    end,
                    TagEnd::Paragraph | TagEnd::CodeBlock | TagEnd::HtmlBlock
                ) {
                    flush_block(&mut out, &mut block);
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if skip == 0 {
                    block.push_str(&t);
                }
            }
            Event::Html(t) | Event::InlineHtml(t) => {
                if skip == 0 {
                    scrub_html(&t, &mut in_script, &mut block);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if skip == 0 {
                    block.push('\n');
                }
            }
            Event::Rule => {}
            _ => {}
        }
    }
    flush_block(&mut out, &mut block);
    out
}

/// Append the prose content of a raw-HTML chunk to the current block:
/// tag markup is removed, script subtrees (which may span several
/// chunks) are dropped entirely.
fn scrub_html(chunk: &str, in_script: &mut bool, block: &mut String) {
    let mut rest = chunk;
    loop {
        if *in_script {
            let lower = rest.to_ascii_lowercase();
            let Some(close) = lower.find("</script") else {
                return;
            };
            match rest[close..].find('>') {
                Some(end) => {
                    *in_script = false;
                    rest = &rest[close + end + 1..];
                }
                None => return,
            }
        }

        let Some(open) = rest.find('<') else {
            block.push_str(rest);
            return;
        };
        block.push_str(&rest[..open]);
        rest = &rest[open..];

        // Drop the tag markup itself; an unterminated tag drops the
        // remainder of the chunk.
        let Some(end) = rest.find('>') else {
            return;
        };
        if is_script_open(&rest[..=end]) {
            *in_script = true;
        }
        rest = &rest[end + 1..];
    }
}

fn is_script_open(tag: &str) -> bool {
    let name = tag.trim_start_matches('<').trim_start().to_ascii_lowercase();
    name.starts_with("script")
        && matches!(
            name.as_bytes().get(6),
            None | Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n')
        )
}

fn flush_block(out: &mut String, block: &mut String) {
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        out.push_str(trimmed);
        out.push('\n');
    }
    block.clear();
}
