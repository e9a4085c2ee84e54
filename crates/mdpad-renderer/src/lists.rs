//! List items and list grouping.
//!
//! Bullet lines (`* `, `- `, `+ `) and numbered lines (`1. `) become `<li>`
//! elements; contiguous runs of items are wrapped in a single list element.
//! Nesting by indentation is not supported.

use std::sync::LazyLock;

use regex::Regex;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[*+-][ \t]+(.*)$").unwrap());
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(\d{1,9})\.[ \t]+(.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    /// Numbered list starting at the given number.
    Ordered(u32),
}

impl ListKind {
    fn same_list(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Unordered, Self::Unordered) | (Self::Ordered(_), Self::Ordered(_))
        )
    }

    fn open_tag(self) -> String {
        match self {
            Self::Unordered => "<ul>".to_owned(),
            Self::Ordered(1) => "<ol>".to_owned(),
            Self::Ordered(start) => format!(r#"<ol start="{start}">"#),
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered(_) => "</ol>",
        }
    }
}

/// Classify a line as a list item, returning its kind and content.
fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(caps) = BULLET_RE.captures(line) {
        return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
    }
    let caps = ORDERED_RE.captures(line)?;
    let start = caps[1].parse().unwrap_or(1);
    caps.get(2).map(|m| (ListKind::Ordered(start), m.as_str()))
}

/// Convert list lines to `<li>` and group contiguous runs.
///
/// With `ordered_lists` numbered runs become `<ol>` and bullet runs `<ul>`;
/// without it every run is a `<ul>` and the two kinds share one list.
pub(crate) fn lists(text: &str, ordered_lists: bool) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open: Option<ListKind> = None;

    for line in text.lines() {
        let Some((kind, item)) = list_item(line) else {
            if let Some(kind) = open.take() {
                out.push(kind.close_tag().to_owned());
            }
            out.push(line.to_owned());
            continue;
        };

        let kind = if ordered_lists {
            kind
        } else {
            ListKind::Unordered
        };
        match open {
            Some(current) if current.same_list(kind) => {}
            Some(current) => {
                out.push(current.close_tag().to_owned());
                out.push(kind.open_tag());
                open = Some(kind);
            }
            None => {
                out.push(kind.open_tag());
                open = Some(kind);
            }
        }
        out.push(format!("<li>{item}</li>"));
    }

    if let Some(kind) = open {
        out.push(kind.close_tag().to_owned());
    }

    out.join("\n")
}
