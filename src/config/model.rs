//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::color::{Palette, Rgb};
use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIRS, DEFAULT_SECTIONS, DEFAULT_TERMINAL_PATTERNS,
    DEFAULT_TITLE_PREFIX,
};
use crate::section::EdgeRules;
use crate::text::TitlePrefix;

use super::loader::{deserialize_to_pathbuf, deserialize_to_pathbuf_vec};

/// Configuration for the conversion run
///
/// Every field is optional in the YAML file; missing fields take the
/// built-in defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder holding the exported CSV files
    #[serde(deserialize_with = "deserialize_to_pathbuf")]
    pub input_dir: PathBuf,
    /// Folders every document is written to
    #[serde(deserialize_with = "deserialize_to_pathbuf_vec")]
    pub output_dirs: Vec<PathBuf>,
    /// Sections in processing order
    pub sections: Vec<SectionSource>,
    /// Case-insensitive patterns marking a task as terminal
    pub terminal_patterns: Vec<String>,
    /// Pattern removed from the start of each title
    pub title_prefix: String,
    /// Category colours layered over the built-in palette
    pub category_colors: HashMap<String, String>,
    /// Section theme colours layered over the built-in palette
    pub theme_colors: HashMap<String, String>,
}

/// One CSV file and the section it produces
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SectionSource {
    /// File name inside the input folder
    pub file: String,
    /// Section identifier, also the output file stem
    pub id: String,
}

impl SectionSource {
    pub fn new(file: &str, id: &str) -> Self {
        SectionSource {
            file: file.to_string(),
            id: id.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dirs: DEFAULT_OUTPUT_DIRS.iter().map(PathBuf::from).collect(),
            sections: DEFAULT_SECTIONS
                .iter()
                .map(|id| SectionSource::new(&format!("{id}.csv"), id))
                .collect(),
            terminal_patterns: DEFAULT_TERMINAL_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            category_colors: HashMap::new(),
            theme_colors: HashMap::new(),
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// Checks that:
    /// - at least one section and one output folder are configured
    /// - section ids and file names are non-empty and ids are unique
    /// - every pattern compiles
    /// - every configured colour is a `#RRGGBB` value
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(anyhow!(
                "No sections specified in configuration. At least one section is required."
            ));
        }

        if self.output_dirs.is_empty() {
            return Err(anyhow!(
                "No output directories specified in configuration. At least one is required."
            ));
        }

        let mut ids = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(anyhow!("Section at index {} has an empty id.", index));
            }
            if section.file.trim().is_empty() {
                return Err(anyhow!(
                    "Section '{}' has an empty file name.",
                    section.id
                ));
            }
            if !ids.insert(section.id.as_str()) {
                return Err(anyhow!(
                    "Section id '{}' is used more than once.",
                    section.id
                ));
            }
        }

        self.edge_rules()?;
        self.title_prefix()?;

        for (name, value) in self.category_colors.iter().chain(self.theme_colors.iter()) {
            value
                .parse::<Rgb>()
                .map_err(|e| anyhow!("Colour for '{}' is invalid: {}", name, e))?;
        }

        Ok(())
    }

    /// Builds the colour palette with the configured overrides
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::with_overrides(
            &self.category_colors,
            &self.theme_colors,
        )?)
    }

    /// Compiles the terminal patterns
    pub fn edge_rules(&self) -> Result<EdgeRules> {
        EdgeRules::new(&self.terminal_patterns)
            .map_err(|e| anyhow!("Invalid terminal pattern in configuration: {}", e))
    }

    /// Compiles the title prefix pattern
    pub fn title_prefix(&self) -> Result<TitlePrefix> {
        TitlePrefix::new(&self.title_prefix)
            .map_err(|e| anyhow!("Invalid title prefix in configuration: {}", e))
    }
}
