//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod render;
pub(crate) mod stats;

use std::io::Read;
use std::path::Path;

pub(crate) use export::ExportArgs;
pub(crate) use render::RenderArgs;
pub(crate) use stats::StatsArgs;

use crate::error::CliError;

/// Read markdown from `path`, or from stdin when `path` is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => read_from(std::io::stdin().lock()),
    }
}

fn read_from(mut reader: impl Read) -> Result<String, CliError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_input_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.md");
        std::fs::write(&path, "# Notes\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "# Notes\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_input(Some(&temp.path().join("missing.md"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_read_from_reader() {
        assert_eq!(read_from("a | b".as_bytes()).unwrap(), "a | b");
    }
}
