//! Configuration management for mdpad.
//!
//! Parses `mdpad.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `export.title`
//! - `export.author`

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override export format.
    pub format: Option<ExportFormat>,
    /// Override export output directory.
    pub output_dir: Option<PathBuf>,
    /// Override document title.
    pub title: Option<String>,
    /// Override HTML escaping of user text.
    pub escape_html: Option<bool>,
    /// Override ordered list rendering.
    pub ordered_lists: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpad.toml";

/// Document export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Standalone HTML5 document.
    #[default]
    Html,
    /// HTML document Word opens as a `.doc`.
    Word,
    /// Plain text with markup removed.
    Text,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Word, Self::Text];

    /// Name used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Word => "word",
            Self::Text => "text",
        }
    }

    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Word => "doc",
            Self::Text => "txt",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Word => "application/msword",
            Self::Text => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "unknown export format '{s}' (expected html, word or text)"
                ))
            })
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape `&`, `<` and `"` in user text.
    pub escape_html: bool,
    /// Render numbered lists as `<ol>`.
    pub ordered_lists: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            ordered_lists: true,
        }
    }
}

/// Raw export configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    format: Option<ExportFormat>,
    output_dir: Option<String>,
    title: Option<String>,
    author: Option<String>,
    lang: Option<String>,
    stylesheet: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Default export format.
    pub format: ExportFormat,
    /// Directory exported documents are written to.
    pub output_dir: PathBuf,
    /// Document title. Falls back to the first H1 when unset.
    pub title: Option<String>,
    /// Document author, written to document metadata.
    pub author: Option<String>,
    /// Document language (`lang` attribute).
    pub lang: String,
    /// Stylesheet embedded into HTML and Word exports instead of the default.
    pub stylesheet: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: PathBuf::from("."),
            title: None,
            author: None,
            lang: "en".to_owned(),
            stylesheet: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.title`").
        field: String,
        /// Error message (e.g., "${`DOC_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Turn an expanded optional string into `None` when it is blank.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdpad.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.export_resolved.format = format;
        }
        if let Some(output_dir) = &settings.output_dir {
            self.export_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(title) = &settings.title {
            self.export_resolved.title = Some(title.clone());
        }
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
        }
        if let Some(ordered_lists) = settings.ordered_lists {
            self.render.ordered_lists = ordered_lists;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_config_from(start)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            render: RenderConfig::default(),
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                output_dir: base.to_path_buf(),
                ..ExportConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let export = &self.export_resolved;
        require_non_empty(&export.lang, "export.lang")?;
        if export.lang.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "export.lang cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.export.title {
            self.export.title = non_blank(expand::expand_env(title, "export.title")?);
        }
        if let Some(ref author) = self.export.author {
            self.export.author = non_blank(expand::expand_env(author, "export.author")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = ExportConfig::default();
        let export = &self.export;

        self.export_resolved = ExportConfig {
            format: export.format.unwrap_or(defaults.format),
            output_dir: export
                .output_dir
                .as_deref()
                .map_or_else(|| config_dir.to_path_buf(), |dir| config_dir.join(dir)),
            title: export.title.clone(),
            author: export.author.clone(),
            lang: export.lang.clone().unwrap_or(defaults.lang),
            stylesheet: export.stylesheet.as_deref().map(|s| config_dir.join(s)),
        };
    }
}
