//! mdpad CLI - Markdown notepad.
//!
//! Provides commands for:
//! - `render`: Render markdown to an HTML fragment
//! - `export`: Write a standalone HTML, Word or text document
//! - `stats`: Print word, character and line counts

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExportArgs, RenderArgs, StatsArgs};
use output::Output;

/// mdpad - Markdown notepad.
#[derive(Parser)]
#[command(name = "mdpad", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover mdpad.toml).
    #[arg(short, long, global = true, env = "MDPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to an HTML fragment.
    Render(RenderArgs),
    /// Export markdown as a standalone document.
    Export(ExportArgs),
    /// Print document statistics.
    Stats(StatsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Render(args) => args.execute(config_path),
        Commands::Export(args) => args.execute(config_path),
        Commands::Stats(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
