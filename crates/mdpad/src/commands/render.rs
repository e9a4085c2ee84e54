//! `mdpad render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use mdpad_config::{CliSettings, Config};
use mdpad_renderer::{MarkdownRenderer, RenderOptions};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: stdin).
    input: Option<PathBuf>,

    /// Write the HTML fragment to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pass raw HTML in the source through unescaped.
    #[arg(long)]
    raw_html: bool,

    /// Render numbered lists as `<ul>` like bullet lists.
    #[arg(long)]
    unordered_lists: bool,

    /// Print the render result (html, title, warnings) as JSON.
    #[arg(long)]
    json: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(config_path, Some(&self.cli_settings()))?;
        let renderer = MarkdownRenderer::with_options(RenderOptions {
            escape_html: config.render.escape_html,
            ordered_lists: config.render.ordered_lists,
        });

        let markdown = read_input(self.input.as_deref())?;
        let result = renderer.render(&markdown);
        tracing::info!(
            bytes = result.html.len(),
            warnings = result.warnings.len(),
            "Rendered markdown"
        );

        for warning in &result.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        let content = if self.json {
            serde_json::to_string_pretty(&result)?
        } else {
            result.html
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &content)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.document(&content)?,
        }

        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            escape_html: self.raw_html.then_some(false),
            ordered_lists: self.unordered_lists.then_some(false),
            ..CliSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw_html: bool, unordered_lists: bool) -> RenderArgs {
        RenderArgs {
            input: None,
            output: None,
            raw_html,
            unordered_lists,
            json: false,
        }
    }

    #[test]
    fn test_cli_settings_default_keeps_config() {
        let settings = args(false, false).cli_settings();
        assert_eq!(settings.escape_html, None);
        assert_eq!(settings.ordered_lists, None);
    }

    #[test]
    fn test_cli_settings_flags_disable_options() {
        let settings = args(true, true).cli_settings();
        assert_eq!(settings.escape_html, Some(false));
        assert_eq!(settings.ordered_lists, Some(false));
    }
}
