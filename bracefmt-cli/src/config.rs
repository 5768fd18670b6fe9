//! Configuration file and flag merging

use anyhow::{Context, Result};
use bracefmt::FormatOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: FormatOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Render into a bounded buffer of this many bytes
    pub capacity: Option<usize>,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            color: true,
        }
    }
}

impl Config {
    /// `<config dir>/bracefmt/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bracefmt").join("config.toml"))
    }

    /// Load an explicit file, or the default file when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective settings after command-line flags override the file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub options: FormatOptions,
    pub capacity: Option<usize>,
    pub color: bool,
}

impl Settings {
    pub fn resolve(config: &Config, cli: &Cli) -> Self {
        Self {
            options: FormatOptions {
                strict: cli.strict || config.format.strict,
            },
            capacity: cli.capacity.or(config.output.capacity),
            color: config.output.color && !cli.no_color,
        }
    }
}
