//! Code protection stage.
//!
//! Fenced blocks and inline code spans are rendered first and moved into the
//! [`Stash`], so emphasis, link and list rules never fire inside code.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fence::FenceTracker;
use crate::html::{code_block, escape_html};
use crate::stash::Stash;

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Fence that has been opened but not yet closed.
struct OpenFence {
    language: Option<String>,
    start_line: usize,
    body: Vec<String>,
}

impl OpenFence {
    fn render(&self) -> String {
        let mut out = String::new();
        code_block(self.language.as_deref(), &self.body.join("\n"), &mut out);
        out
    }
}

/// Replace code blocks and inline code spans with stash tokens.
///
/// An unterminated fence swallows the rest of the document and adds a
/// warning; it never fails.
pub(crate) fn protect_code(input: &str, stash: &mut Stash, warnings: &mut Vec<String>) -> String {
    let mut fence = FenceTracker::new();
    let mut open: Option<OpenFence> = None;
    let mut lines: Vec<String> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let is_marker = fence.update(line);
        match open.take() {
            Some(block) if is_marker => lines.push(stash.block(block.render())),
            Some(mut block) => {
                block.body.push(line.to_owned());
                open = Some(block);
            }
            None if is_marker => {
                open = Some(OpenFence {
                    language: fence.language().map(str::to_owned),
                    start_line: idx + 1,
                    body: Vec::new(),
                });
            }
            None => lines.push(protect_inline(line, stash)),
        }
    }

    if let Some(block) = open {
        warnings.push(format!(
            "line {}: unclosed code fence, consumed to end of document",
            block.start_line
        ));
        lines.push(stash.block(block.render()));
    }

    lines.join("\n")
}

/// Replace single-backtick spans on one line with stash tokens.
fn protect_inline(line: &str, stash: &mut Stash) -> String {
    if !line.contains('`') {
        return line.to_owned();
    }
    INLINE_CODE_RE
        .replace_all(line, |caps: &Captures<'_>| {
            stash.inline(format!("<code>{}</code>", escape_html(&caps[1])))
        })
        .into_owned()
}
