//! Markdown renderer entry points.

use std::sync::LazyLock;

use regex::Regex;

use crate::html::plain_text;
use crate::pipeline::{Stage, StageContext};
use crate::stash::sanitize;

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h1>(.*?)</h1>").unwrap());

/// Result of rendering markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Plain text of the first H1 heading.
    pub title: Option<String>,
    /// Warnings generated during conversion (e.g., unclosed code fences).
    pub warnings: Vec<String>,
}

/// Rendering switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderOptions {
    /// Escape `&`, `<` and `"` in user text. When disabled, raw HTML in the
    /// source is passed through to the output.
    pub escape_html: bool,
    /// Wrap numbered runs in `<ol>` instead of `<ul>`.
    pub ordered_lists: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            ordered_lists: true,
        }
    }
}

/// Markdown to HTML renderer.
///
/// Holds only its options; every call to [`render`](Self::render) is
/// independent and the renderer can be shared freely.
///
/// # Example
///
/// ```
/// use mdpad_renderer::MarkdownRenderer;
///
/// let result = MarkdownRenderer::new().render("# Hello\n\n**Bold** text");
/// assert_eq!(result.html, "<h1>Hello</h1>\n<p><strong>Bold</strong> text</p>");
/// assert_eq!(result.title.as_deref(), Some("Hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Enable or disable escaping of user text (enabled by default).
    #[must_use]
    pub fn with_escape_html(mut self, enabled: bool) -> Self {
        self.options.escape_html = enabled;
        self
    }

    /// Enable or disable `<ol>` for numbered lists (enabled by default).
    ///
    /// When disabled every list is a `<ul>`.
    #[must_use]
    pub fn with_ordered_lists(mut self, enabled: bool) -> Self {
        self.options.ordered_lists = enabled;
        self
    }

    /// Render markdown text. Never fails; malformed syntax is left as text.
    pub fn render(&self, markdown: &str) -> RenderResult {
        let source = sanitize(markdown);
        let source = source.replace("\r\n", "\n");

        let mut ctx = StageContext::new(&self.options);
        let mut text = source;
        for stage in Stage::ORDER {
            text = stage.apply(&text, &mut ctx);
        }

        let html = ctx.stash.restore(&text);
        let title = extract_title(&html);

        RenderResult {
            html,
            title,
            warnings: ctx.warnings,
        }
    }
}

/// Render markdown to HTML with default options.
///
/// Total function: `""` renders to `""`.
pub fn render_to_html(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown).html
}

fn extract_title(html: &str) -> Option<String> {
    let caps = H1_RE.captures(html)?;
    let title = plain_text(&caps[1]);
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_owned())
}
