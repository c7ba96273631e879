//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating
//! the optional configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use serde_yaml::from_str;

use crate::utils::{expand_path, find_project_folder};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config = parse_config(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    config.validate()?;

    debug!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Parses configuration YAML without validating it
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(from_str(content)?)
}

/// Finds the configuration file to use
///
/// Looks at the given path first, then for the same file name inside the
/// platform configuration folder.
///
/// # Returns
/// * `Option<PathBuf>` - The file found, or `None` when neither exists
pub fn locate_config(config: &Path) -> Option<PathBuf> {
    if config.is_file() {
        return Some(config.to_path_buf());
    }

    let file_name = config.file_name()?;
    let candidate = find_project_folder()?.config_dir().join(file_name);
    candidate.is_file().then_some(candidate)
}

/// Loads the configuration file if one exists, the defaults otherwise
///
/// # Errors
/// Returns an error if a configuration file exists but is invalid
pub fn load_or_default(config: &Path) -> Result<Config> {
    match locate_config(config) {
        Some(file) => load_config(&file),
        None => {
            info!(
                "No configuration file found at {}, using built-in sections",
                config.display()
            );
            Ok(Config::default())
        }
    }
}

/// A path written either as one string or as a list of segments
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PathSpec {
    Joined(String),
    Segments(Vec<String>),
}

impl From<PathSpec> for PathBuf {
    fn from(spec: PathSpec) -> Self {
        match spec {
            PathSpec::Joined(path) => PathBuf::from(expand_path(&path)),
            PathSpec::Segments(segments) => segments.iter().map(|s| expand_path(s)).collect(),
        }
    }
}

/// Deserializes a path from a string or an array of segments
///
/// This function is used to deserialize the input folder of a Config struct.
pub fn deserialize_to_pathbuf<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    PathSpec::deserialize(deserializer).map(PathBuf::from)
}

/// Deserializes a list of paths, each a string or an array of segments
///
/// This function is used to deserialize the output folders of a Config struct.
pub fn deserialize_to_pathbuf_vec<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let specs = Vec::<PathSpec>::deserialize(deserializer)?;
    Ok(specs.into_iter().map(PathBuf::from).collect())
}
