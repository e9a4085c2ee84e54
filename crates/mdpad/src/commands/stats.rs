//! `mdpad stats` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpad_renderer::{DocumentStats, calculate_document_stats};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the stats command.
#[derive(Args)]
pub(crate) struct StatsArgs {
    /// Markdown file to analyze (default: stdin).
    input: Option<PathBuf>,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,
}

impl StatsArgs {
    /// Execute the stats command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markdown = read_input(self.input.as_deref())?;
        let stats = calculate_document_stats(&markdown);

        if self.json {
            output.document(&serde_json::to_string_pretty(&stats)?)?;
        } else {
            output.document(&format_stats(&stats))?;
        }
        Ok(())
    }
}

fn format_stats(stats: &DocumentStats) -> String {
    format!(
        "Words: {}\nCharacters: {} ({} with spaces)\nLines: {}\nReading time: {} min",
        stats.words,
        stats.characters,
        stats.characters_with_spaces,
        stats.lines,
        stats.reading_minutes
    )
}
