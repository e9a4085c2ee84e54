//! Plain text conversion of rendered HTML.

use std::sync::LazyLock;

use mdpad_renderer::plain_text;
use regex::Regex;

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").unwrap());
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<li>").unwrap());
static TABLE_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(?:thead|tbody)>\n?").unwrap());
static CELL_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</t[hd]><t[hd]>").unwrap());
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<hr>").unwrap());
static BLOCK_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</(?:p|h[1-6]|blockquote|pre|table|ul|ol)>").unwrap());

/// Convert a rendered HTML fragment to readable plain text.
///
/// List items become `- ` lines, table cells are tab separated, blocks are
/// separated by one blank line and entities are decoded.
pub(crate) fn html_to_text(html: &str) -> String {
    let text = BREAK_RE.replace_all(html, "\n");
    let text = LIST_ITEM_RE.replace_all(&text, "- ");
    let text = TABLE_SECTION_RE.replace_all(&text, "");
    let text = CELL_GAP_RE.replace_all(&text, "\t");
    let text = RULE_RE.replace_all(&text, "----------");
    let text = BLOCK_END_RE.replace_all(&text, "${0}\n");
    let text = plain_text(&text);

    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 || out.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out
}
