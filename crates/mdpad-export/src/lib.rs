//! Document export for mdpad.
//!
//! Wraps rendered Markdown into a standalone HTML page, a Word-compatible
//! `.doc` document or plain text.
//!
//! # Example
//!
//! ```
//! use mdpad_export::{ExportFormat, ExportOptions, Exporter};
//!
//! let exporter = Exporter::new(ExportOptions::default());
//! let doc = exporter.export("# Release Notes\n\nAll **good**.", ExportFormat::Html);
//!
//! assert_eq!(doc.file_name, "release-notes.html");
//! assert!(doc.content.contains("<title>Release Notes</title>"));
//! ```

mod template;
mod text;

use std::path::{Path, PathBuf};

use mdpad_config::Config;
pub use mdpad_config::ExportFormat;
use mdpad_renderer::{MarkdownRenderer, RenderOptions};

use crate::template::{DEFAULT_CSS, PageData};

/// File stem used when neither a title nor an H1 is available.
const DEFAULT_FILE_STEM: &str = "document";

/// Title used in document metadata when none is available.
const DEFAULT_TITLE: &str = "Untitled";

/// Longest slug used as a file stem.
const MAX_SLUG_LEN: usize = 64;

/// Error during document export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the exported document failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the configured stylesheet failed.
    #[error("Failed to read stylesheet {}: {source}", path.display())]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options controlling document export.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Explicit title. Falls back to the first H1 of the document.
    pub title: Option<String>,
    /// Author written to document metadata.
    pub author: Option<String>,
    /// Document language.
    pub lang: String,
    /// Stylesheet contents. Uses the built-in stylesheet when `None`.
    pub stylesheet: Option<String>,
    /// Options passed to the renderer.
    pub render: RenderOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            lang: "en".to_owned(),
            stylesheet: None,
            render: RenderOptions::default(),
        }
    }
}

impl ExportOptions {
    /// Build export options from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Stylesheet`] if the configured stylesheet
    /// cannot be read.
    pub fn from_config(config: &Config) -> Result<Self, ExportError> {
        let export = &config.export_resolved;
        let stylesheet = export
            .stylesheet
            .as_deref()
            .map(|path| {
                std::fs::read_to_string(path).map_err(|source| ExportError::Stylesheet {
                    path: path.to_path_buf(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            title: export.title.clone(),
            author: export.author.clone(),
            lang: export.lang.clone(),
            stylesheet,
            render: RenderOptions {
                escape_html: config.render.escape_html,
                ordered_lists: config.render.ordered_lists,
            },
        })
    }
}

/// A rendered document ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Output format.
    pub format: ExportFormat,
    /// Suggested file name, derived from the title.
    pub file_name: String,
    /// Full document contents.
    pub content: String,
    /// Title used for the document.
    pub title: String,
    /// Warnings produced while rendering.
    pub warnings: Vec<String>,
}

impl ExportedDocument {
    /// MIME type of the document.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the document into `dir` under its suggested file name.
    ///
    /// Creates `dir` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            format = %self.format,
            bytes = self.content.len(),
            "Wrote document"
        );
        Ok(path)
    }
}

/// Renders Markdown and wraps it in the requested document format.
pub struct Exporter {
    options: ExportOptions,
    renderer: MarkdownRenderer,
}

impl Exporter {
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        let renderer = MarkdownRenderer::with_options(options.render);
        Self { options, renderer }
    }

    /// Render `markdown` and build a document in `format`.
    #[must_use]
    pub fn export(&self, markdown: &str, format: ExportFormat) -> ExportedDocument {
        let rendered = self.renderer.render(markdown);

        let found_title = self.options.title.clone().or(rendered.title);
        let stem = found_title
            .as_deref()
            .map_or_else(|| DEFAULT_FILE_STEM.to_owned(), slugify);
        let title = found_title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());

        let page = PageData {
            title: &title,
            author: self.options.author.as_deref(),
            lang: &self.options.lang,
            css: self.options.stylesheet.as_deref().unwrap_or(DEFAULT_CSS),
            body: &rendered.html,
        };
        let content = match format {
            ExportFormat::Html => template::html_document(&page),
            ExportFormat::Word => template::word_document(&page),
            ExportFormat::Text => text::html_to_text(&rendered.html),
        };

        let file_name = format!("{stem}.{}", format.extension());

        tracing::debug!(%format, %file_name, bytes = content.len(), "Exported document");

        ExportedDocument {
            format,
            file_name,
            content,
            title,
            warnings: rendered.warnings,
        }
    }
}

/// Turn a title into a lowercase ASCII file stem.
///
/// Runs of non-alphanumeric characters collapse into one `-`. Returns
/// `"document"` when nothing usable remains.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if slug.len() >= MAX_SLUG_LEN {
                break;
            }
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let trimmed_len = slug.trim_end_matches('-').len();
    slug.truncate(trimmed_len);

    if slug.is_empty() {
        DEFAULT_FILE_STEM.to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Release Notes"), "release-notes");
        assert_eq!(slugify("  Q3: Plans & Goals!  "), "q3-plans-goals");
        assert_eq!(slugify("über"), "ber");
        assert_eq!(slugify("!!!"), "document");
        assert_eq!(slugify(""), "document");
    }

    #[test]
    fn test_slugify_limits_length() {
        let title = "a".repeat(100);
        assert_eq!(slugify(&title).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_export_html_uses_h1_title() {
        let exporter = Exporter::new(ExportOptions::default());
        let doc = exporter.export("# My Notes\n\nHello", ExportFormat::Html);

        assert_eq!(doc.title, "My Notes");
        assert_eq!(doc.file_name, "my-notes.html");
        assert_eq!(doc.mime_type(), "text/html");
        assert!(doc.content.contains("<title>My Notes</title>"));
        assert!(doc.content.contains("<h1>My Notes</h1>\n<p>Hello</p>"));
        assert!(doc.content.contains(DEFAULT_CSS));
    }

    #[test]
    fn test_export_found_title_wins() {
        let options = ExportOptions {
            title: Some("Handbook".to_owned()),
            ..ExportOptions::default()
        };
        let doc = Exporter::new(options).export("# Chapter 1", ExportFormat::Word);

        assert_eq!(doc.title, "Handbook");
        assert_eq!(doc.file_name, "handbook.doc");
        assert!(doc.content.contains("<title>Handbook</title>"));
        assert!(doc.content.contains("<w:WordDocument>"));
    }

    #[test]
    fn test_export_without_title() {
        let exporter = Exporter::new(ExportOptions::default());
        let doc = exporter.export("just text", ExportFormat::Text);

        assert_eq!(doc.title, DEFAULT_TITLE);
        assert_eq!(doc.file_name, "document.txt");
        assert_eq!(doc.content, "just text");
    }

    #[test]
    fn test_export_text() {
        let exporter = Exporter::new(ExportOptions::default());
        let doc = exporter.export(
            "# Shopping\n\n- milk\n- eggs\n\nDone & dusted",
            ExportFormat::Text,
        );

        assert_eq!(doc.content, "Shopping\n\n- milk\n- eggs\n\nDone & dusted");
        assert_eq!(doc.mime_type(), "text/plain");
    }

    #[test]
    fn test_export_custom_stylesheet_and_author() {
        let options = ExportOptions {
            author: Some("Ada".to_owned()),
            stylesheet: Some("p { margin: 0; }".to_owned()),
            ..ExportOptions::default()
        };
        let doc = Exporter::new(options).export("text", ExportFormat::Html);

        assert!(doc.content.contains("<style>\np { margin: 0; }\n</style>"));
        assert!(!doc.content.contains(DEFAULT_CSS));
        assert!(doc.content.contains(r#"<meta name="author" content="Ada">"#));
    }

    #[test]
    fn test_export_collects_warnings() {
        let exporter = Exporter::new(ExportOptions::default());
        let doc = exporter.export("```\nnever closed", ExportFormat::Html);
        assert_eq!(doc.warnings.len(), 1);
    }

    #[test]
    fn test_write_to_creates_directory() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("out");

        let exporter = Exporter::new(ExportOptions::default());
        let doc = exporter.export("# Report", ExportFormat::Html);
        let path = doc.write_to(&out_dir).unwrap();

        assert_eq!(path, out_dir.join("report.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.content);
    }

    #[test]
    fn test_write_to_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let doc = Exporter::new(ExportOptions::default()).export("x", ExportFormat::Text);
        let err = doc.write_to(&blocker).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_options_from_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("style.css"), "h1 { color: blue; }").unwrap();
        std::fs::write(
            temp.path().join("mdpad.toml"),
            "[render]\nordered_lists = false\n\n[export]\nauthor = \"Ada\"\nlang = \"de\"\nstylesheet = \"style.css\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&temp.path().join("mdpad.toml")), None).unwrap();
        let options = ExportOptions::from_config(&config).unwrap();

        assert_eq!(options.author.as_deref(), Some("Ada"));
        assert_eq!(options.lang, "de");
        assert_eq!(options.stylesheet.as_deref(), Some("h1 { color: blue; }"));
        assert!(options.render.escape_html);
        assert!(!options.render.ordered_lists);
    }

    #[test]
    fn test_options_from_config_missing_stylesheet() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("mdpad.toml"),
            "[export]\nstylesheet = \"missing.css\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&temp.path().join("mdpad.toml")), None).unwrap();
        let err = ExportOptions::from_config(&config).unwrap_err();
        assert!(matches!(err, ExportError::Stylesheet { .. }));
    }
}
