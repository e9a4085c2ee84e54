//! Line-oriented markdown to HTML renderer.
//!
//! The renderer is a fixed pipeline of named [`Stage`]s over the document
//! text. Code blocks, inline code and tables are rendered first and set aside
//! behind placeholders, the remaining text goes through regex substitution
//! rules (headers, emphasis, images, links, lists, quotes, rules), and
//! paragraphs are wrapped last.
//!
//! Rendering never fails: unmatched syntax is left as literal text.
//!
//! # Example
//!
//! ```
//! use mdpad_renderer::render_to_html;
//!
//! let html = render_to_html("| A | B |\n|---|---|\n| 1 | 2 |");
//! assert!(html.starts_with("<table>"));
//! assert!(html.contains("<td>1</td><td>2</td>"));
//! ```

mod code;
mod fence;
mod html;
mod lists;
mod paragraph;
mod pipeline;
mod renderer;
mod rules;
mod stash;
mod stats;
mod table;

pub use html::{escape_html, plain_text, unescape_html};
pub use pipeline::Stage;
pub use renderer::{MarkdownRenderer, RenderOptions, RenderResult, render_to_html};
pub use stats::{DocumentStats, calculate_document_stats};
