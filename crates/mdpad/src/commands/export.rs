//! `mdpad export` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use mdpad_config::{CliSettings, Config};
use mdpad_export::{ExportFormat, ExportOptions, Exporter};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Markdown file to export (`-` for stdin).
    input: PathBuf,

    /// Document format (overrides config).
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Directory to write the document to (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Document title (default: first H1 heading).
    #[arg(long)]
    title: Option<String>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if config loading, reading the input or writing the
    /// document fails.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CliError::Validation("--title cannot be empty".to_owned()));
        }

        let cli_settings = CliSettings {
            format: self.format,
            output_dir: self.output_dir.clone(),
            title: self.title.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let format = config.export_resolved.format;

        let markdown = read_input(Some(&self.input))?;
        output.info(&format!(
            "Exporting {} as {format}...",
            self.input.display()
        ));

        let exporter = Exporter::new(ExportOptions::from_config(&config)?);
        let document = exporter.export(&markdown, format);

        for warning in &document.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        let path = document.write_to(&config.export_resolved.output_dir)?;
        output.success("\nDocument exported successfully!");
        output.info(&format!("Title: {}", document.title));
        output.highlight(&path.display().to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_export_writes_document() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plan.md");
        std::fs::write(&input, "# Launch Plan\n\n- [x] ship").unwrap();
        let config_path = temp.path().join("mdpad.toml");
        std::fs::write(&config_path, "[export]\nformat = \"text\"\noutput_dir = \"out\"\n").unwrap();

        let args = ExportArgs {
            input,
            format: None,
            output_dir: None,
            title: None,
        };
        args.execute(Some(&config_path)).unwrap();

        let written = std::fs::read_to_string(temp.path().join("out/launch-plan.txt")).unwrap();
        assert!(written.starts_with("Launch Plan\n\n- "));
    }

    #[test]
    fn test_export_rejects_blank_title() {
        let temp = TempDir::new().unwrap();
        let args = ExportArgs {
            input: temp.path().join("doc.md"),
            format: Some(ExportFormat::Html),
            output_dir: None,
            title: Some("  ".to_owned()),
        };

        let err = args.execute(None).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
