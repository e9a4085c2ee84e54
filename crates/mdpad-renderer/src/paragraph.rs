//! Paragraph wrapping.
//!
//! Blank lines separate blocks. Consecutive lines that are not block-level
//! HTML are joined into one `<p>`; block-level lines pass through unwrapped,
//! so no paragraph ever encloses a header, list, quote, rule, table or code
//! block and no empty paragraph is produced.

use std::sync::LazyLock;

use regex::Regex;

use crate::stash::is_block_token;

static BLOCK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*<(?:/?(?:ul|ol)|li|h[1-6]|blockquote|hr|pre|table)\b").unwrap()
});

fn is_block_line(line: &str) -> bool {
    is_block_token(line) || BLOCK_LINE_RE.is_match(line)
}

fn flush(pending: &mut Vec<&str>, out: &mut Vec<String>) {
    if !pending.is_empty() {
        out.push(format!("<p>{}</p>", pending.join("\n")));
        pending.clear();
    }
}

pub(crate) fn paragraphs(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut pending, &mut out);
        } else if is_block_line(line) {
            flush(&mut pending, &mut out);
            out.push(line.trim().to_owned());
        } else {
            pending.push(line.trim());
        }
    }
    flush(&mut pending, &mut out);

    out.join("\n")
}
