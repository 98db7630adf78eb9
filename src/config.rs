//! Configuration handling for Bootsy.
//! This module provides the in-memory model of the environments declared in the
//! configuration file and the functions loading it from disk.

use crate::constants::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directories and files declared for one environment.
///
/// Both lists are optional at the parsing level so that a missing key can be
/// told apart from an empty list and reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvironmentSpec {
    #[serde(rename = "dirs")]
    pub directories: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
}

impl EnvironmentSpec {
    pub fn new(directories: Vec<String>, files: Vec<String>) -> Self {
        Self { directories: Some(directories), files: Some(files) }
    }

    /// Declared directories, empty when the key is missing.
    pub fn directories(&self) -> &[String] {
        self.directories.as_deref().unwrap_or_default()
    }

    /// Declared files, empty when the key is missing.
    pub fn files(&self) -> &[String] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// Mapping from environment name to its spec, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    environments: IndexMap<String, EnvironmentSpec>,
}

impl Config {
    pub fn new(environments: IndexMap<String, EnvironmentSpec>) -> Self {
        Self { environments }
    }

    pub fn get(&self, name: &str) -> Option<&EnvironmentSpec> {
        self.environments.get(name)
    }

    pub fn environments(&self) -> impl Iterator<Item = (&String, &EnvironmentSpec)> {
        self.environments.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

impl FromIterator<(String, EnvironmentSpec)> for Config {
    fn from_iter<I: IntoIterator<Item = (String, EnvironmentSpec)>>(iter: I) -> Self {
        Self { environments: iter.into_iter().collect() }
    }
}

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, TOML unless stated otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("yml") | Some("yaml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}

/// Returns the configuration path: `$BOOTSY` when set, `~/.config/.bootsy.toml` otherwise.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(DEFAULT_CONFIG_FILE),
    }
}

/// Parses configuration content in the given format.
///
/// # Errors
/// * `Error::ConfigError` if the content is malformed
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let parsed = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e.trim())))
}

/// Loads the configuration file at `path`.
///
/// # Errors
/// * `Error::ConfigNotFound` if the file does not exist
/// * `Error::IoError` if it cannot be read
/// * `Error::ConfigError` if it cannot be parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigNotFound { path: path.display().to_string() });
    }

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_config(&content, ConfigFormat::from_path(path))
}
