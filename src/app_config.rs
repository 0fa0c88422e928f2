use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::diff::{LineBreaks, RenderOptions};
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading
/// and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Comparison settings
    #[serde(default)]
    pub diff: DiffConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output format for a comparison
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Marked rows, one per line
    #[default]
    Text,
    // @format: Entries and summary as a JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// When to colour text output
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    // @mode: Colour when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    // @returns: Whether colour is used given the output is a terminal or not
    pub fn resolve(&self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Output configuration.
///
/// Colour, line numbers, only-changes and the summary line shape text output
/// only; JSON output always carries every entry and the summary.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix rows with their position
    #[serde(default = "default_true")]
    pub line_numbers: bool,

    /// Colour added and removed rows
    #[serde(default)]
    pub color: ColorMode,

    /// Skip unchanged rows in text output
    #[serde(default)]
    pub only_changes: bool,

    /// Print per-kind counts after the rows
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            line_numbers: default_true(),
            color: ColorMode::default(),
            only_changes: false,
            show_summary: default_true(),
        }
    }
}

impl OutputConfig {
    /// Build render options for the given terminal state
    pub fn render_options(&self, is_terminal: bool) -> RenderOptions {
        RenderOptions {
            line_numbers: self.line_numbers,
            color: self.color.resolve(is_terminal),
            only_changes: self.only_changes,
        }
    }
}

/// Comparison configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DiffConfig {
    /// Line break handling applied to both inputs
    #[serde(default)]
    pub line_breaks: LineBreaks,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Write configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        crate::file_utils::FileManager::write_to_file(path, &config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }
}
