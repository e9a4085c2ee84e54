//! HTML fragments and escaping helpers shared by the rendering stages.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap()
});

/// Escape text for use in HTML content and attribute values.
///
/// # Examples
///
/// ```
/// use mdpad_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape user text before the substitution rules run.
///
/// `>` is kept because it is the blockquote marker; it is harmless in text
/// content and inside double-quoted attributes. An `&` that already starts a
/// well-formed entity reference (`&copy;`, `&#169;`, `&#xA9;`) is kept too.
pub(crate) fn escape_source(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.char_indices() {
        match c {
            '&' if ENTITY_RE.is_match(&text[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the entities produced by [`escape_html`] plus `&#39;` and `&nbsp;`.
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Strip tags from an HTML fragment and decode its entities.
///
/// # Examples
///
/// ```
/// use mdpad_renderer::plain_text;
///
/// assert_eq!(plain_text("<strong>Fish</strong> &amp; chips"), "Fish & chips");
/// ```
pub fn plain_text(html: &str) -> String {
    unescape_html(&TAG_RE.replace_all(html, ""))
}

/// Write a `<pre><code>` block. The content is always escaped.
pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = lang {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }
}
