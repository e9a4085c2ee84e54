//! Regex substitution rules.
//!
//! Each function is one named rule of the pipeline and can be applied on its
//! own. They operate on whole documents with multi-line anchors; none of them
//! can fail, unmatched syntax is left untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `#` to `######` followed by whitespace. The run must be exact, so seven
/// hashes never match. An optional closing run of `#` is dropped.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]{0,3}(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").unwrap()
});

// Opening delimiters must be followed by a non-space so a `* item` bullet
// is never taken for emphasis.
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^\s*](?:[^\n]*?[^\s*])?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\s*](?:[^\n]*?[^\s*])?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*](?:[^*\n]*[^\s*])?)\*").unwrap());
static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^\s~](?:[^\n]*?[^\s~])?)~~").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\s]*)\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]*)\)").unwrap());

static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}>[ \t]?(.*)$").unwrap());
static ADJACENT_QUOTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</blockquote>\n<blockquote>").unwrap());

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$").unwrap());

/// `# Title` → `<h1>Title</h1>`, up to `<h6>`.
pub(crate) fn headers(text: &str) -> String {
    HEADER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

/// Bold-italic, then bold, then italic, then strikethrough.
pub(crate) fn emphasis(text: &str) -> String {
    let text = BOLD_ITALIC_RE.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>${1}</em>");
    STRIKE_RE.replace_all(&text, "<del>${1}</del>").into_owned()
}

/// `![alt](url)` → `<img src="url" alt="alt">`.
///
/// Must run before [`links`], which would otherwise claim the `[alt](url)` part.
pub(crate) fn images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, r#"<img src="${2}" alt="${1}">"#)
        .into_owned()
}

/// `[text](url)` → `<a href="url">text</a>`.
pub(crate) fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}

/// `> quote` → `<blockquote>quote</blockquote>`; adjacent quote lines merge
/// into one element separated by `<br>`.
pub(crate) fn blockquotes(text: &str) -> String {
    let text = BLOCKQUOTE_RE.replace_all(text, "<blockquote>${1}</blockquote>");
    ADJACENT_QUOTES_RE
        .replace_all(&text, "<br>")
        .into_owned()
}

/// A line of only `---` (or `***`, `___`) → `<hr>`.
pub(crate) fn horizontal_rules(text: &str) -> String {
    RULE_RE.replace_all(text, "<hr>").into_owned()
}
