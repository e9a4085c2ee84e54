//! Placeholder storage for already-rendered HTML.
//!
//! Code blocks, inline code spans and tables are rendered early and replaced
//! by opaque tokens so the substitution rules never see their content. The
//! tokens are swapped back once every stage has run.
//!
//! A token is `U+E000`, a kind marker (`B` for block, `I` for inline), the
//! entry index and `U+E001`. Both delimiters are private-use characters that
//! [`sanitize`] strips from the source, so user text can never forge a token.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';
const BLOCK: char = 'B';
const INLINE: char = 'I';

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}[BI](\d+)\x{E001}").unwrap());

/// Remove placeholder delimiters from source text.
pub(crate) fn sanitize(text: &str) -> Cow<'_, str> {
    if text.contains([OPEN, CLOSE]) {
        Cow::Owned(text.chars().filter(|&c| c != OPEN && c != CLOSE).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Check whether a line holds nothing but a block token.
pub(crate) fn is_block_token(line: &str) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    chars.next() == Some(OPEN) && chars.next() == Some(BLOCK) && trimmed.ends_with(CLOSE)
}

/// Ordered store of rendered fragments.
#[derive(Debug, Default)]
pub(crate) struct Stash {
    entries: Vec<String>,
}

impl Stash {
    /// Store a block-level fragment and return its token.
    ///
    /// The token is meant to occupy a line of its own.
    pub(crate) fn block(&mut self, html: String) -> String {
        self.push(BLOCK, html)
    }

    /// Store an inline fragment and return its token.
    pub(crate) fn inline(&mut self, html: String) -> String {
        self.push(INLINE, html)
    }

    fn push(&mut self, kind: char, html: String) -> String {
        let index = self.entries.len();
        self.entries.push(html);
        format!("{OPEN}{kind}{index}{CLOSE}")
    }

    /// Replace every token in `text` with its stored fragment.
    ///
    /// Fragments may contain tokens of earlier entries (a table cell holding
    /// an inline code span); those are expanded recursively. An entry only
    /// ever expands indices below its own, which bounds the recursion.
    pub(crate) fn restore(&self, text: &str) -> String {
        self.restore_below(text, self.entries.len())
    }

    fn restore_below(&self, text: &str, limit: usize) -> String {
        if self.entries.is_empty() {
            return text.to_owned();
        }
        TOKEN_RE
            .replace_all(text, |caps: &Captures<'_>| {
                let index = caps[1].parse::<usize>().ok().filter(|&i| i < limit);
                match index.and_then(|i| self.entries.get(i).map(|html| (i, html))) {
                    Some((i, html)) => self.restore_below(html, i),
                    None => String::new(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_round_trip() {
        let mut stash = Stash::default();
        let token = stash.inline("<code>x</code>".to_owned());
        let text = format!("before {token} after");
        assert_eq!(stash.restore(&text), "before <code>x</code> after");
    }

    #[test]
    fn test_restore_nested_tokens() {
        let mut stash = Stash::default();
        let code = stash.inline("<code>a|b</code>".to_owned());
        let table = stash.block(format!("<td>{code}</td>"));
        assert_eq!(stash.restore(&table), "<td><code>a|b</code></td>");
    }

    #[test]
    fn test_self_reference_is_dropped() {
        let mut stash = Stash::default();
        let token = stash.inline(format!("{OPEN}{INLINE}0{CLOSE}"));
        assert_eq!(stash.restore(&token), "");
    }

    #[test]
    fn test_restore_without_entries_is_identity() {
        let stash = Stash::default();
        assert_eq!(stash.restore("plain"), "plain");
    }

    #[test]
    fn test_is_block_token() {
        let mut stash = Stash::default();
        let block = stash.block(String::new());
        let inline = stash.inline(String::new());
        assert!(is_block_token(&block));
        assert!(is_block_token(&format!("  {block} ")));
        assert!(!is_block_token(&inline));
        assert!(!is_block_token("text"));
    }

    #[test]
    fn test_sanitize_strips_delimiters() {
        assert_eq!(sanitize("a\u{E000}B0\u{E001}b"), "aB0b");
        assert!(matches!(sanitize("clean"), Cow::Borrowed("clean")));
    }
}
