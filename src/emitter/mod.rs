//! Document output
//!
//! This module serialises section documents and writes the same bytes to
//! every output directory.

use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, file_operation_error, serialization_error};
use crate::section::SectionDocument;

/// Result of emitting one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Identifier of the emitted section
    pub section_id: String,
    /// Files written, or that would be written in a dry run
    pub destinations: Vec<PathBuf>,
    /// Size of the serialised document
    pub bytes: usize,
    /// Whether anything was written to disk
    pub written: bool,
}

/// Serialises a document as two-space indented JSON
///
/// Non-ASCII characters are written as-is.
///
/// # Errors
/// Returns an error if serialisation fails
pub fn to_json(document: &SectionDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| serialization_error(e, &document.id))
}

/// Writes section documents to a fixed set of directories
#[derive(Debug, Clone)]
pub struct Emitter {
    output_dirs: Vec<PathBuf>,
    run_execution: bool,
}

impl Emitter {
    /// Creates an emitter
    ///
    /// # Arguments
    /// * `output_dirs` - Directories each document is written to
    /// * `run_execution` - Whether to actually write files (true) or just simulate it (false)
    pub fn new(output_dirs: Vec<PathBuf>, run_execution: bool) -> Self {
        Emitter {
            output_dirs,
            run_execution,
        }
    }

    /// Paths a section document is written to
    pub fn destinations(&self, section_id: &str) -> Vec<PathBuf> {
        let file_name = format!("{section_id}.json");
        self.output_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .collect()
    }

    /// Serialises the document once and writes it to every destination
    ///
    /// Missing output directories are created.
    ///
    /// # Errors
    /// Returns an error if serialisation or any write fails
    pub fn emit(&self, document: &SectionDocument) -> Result<EmitReport> {
        let json = to_json(document)?;
        let destinations = self.destinations(&document.id);

        if self.run_execution {
            for destination in &destinations {
                write_file(destination, json.as_bytes())?;
            }
        } else {
            for destination in &destinations {
                debug!("Simulating write: {}", destination.display());
            }
        }

        Ok(EmitReport {
            section_id: document.id.clone(),
            destinations,
            bytes: json.len(),
            written: self.run_execution,
        })
    }
}

fn write_file(destination: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = destination.parent() {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    debug!(
        "Writing {} bytes: {}",
        content.len(),
        destination.display()
    );
    write(destination, content)
        .map_err(|e| file_operation_error(e, destination.to_path_buf(), "write"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{LegendEntry, TaskNode};
    use std::fs;
    use tempfile::tempdir;

    fn document() -> SectionDocument {
        SectionDocument {
            id: "discovery".to_string(),
            title: "Découverte".to_string(),
            subtitle: "1 tasks — Review".to_string(),
            header_class: String::new(),
            theme_color: "#0d47a1".to_string(),
            th_class: String::new(),
            section_class: String::new(),
            table_columns: vec!["#".to_string()],
            legend: vec![LegendEntry {
                label: "Review".to_string(),
                color: "#6a1b9a".to_string(),
            }],
            tasks: vec![TaskNode {
                id: "A".to_string(),
                is_start_node: true,
                ..TaskNode::default()
            }],
            styles: Vec::new(),
        }
    }

    #[test]
    fn test_to_json_format() {
        let json = to_json(&document()).unwrap();
        assert!(json.starts_with("{\n  \"id\": \"discovery\",\n  \"title\": \"Découverte\""));
        assert!(json.contains("1 tasks — Review"));
        assert!(json.contains("\"connectsTo\": []"));
        assert!(json.contains("\"styles\": {}"));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_emit_writes_identical_files() {
        let temp_dir = tempdir().unwrap();
        let dirs = vec![
            temp_dir.path().join("data"),
            temp_dir.path().join("public").join("data"),
        ];
        let emitter = Emitter::new(dirs, true);

        let report = emitter.emit(&document()).unwrap();
        assert!(report.written);
        assert_eq!(report.destinations.len(), 2);

        let first = fs::read(&report.destinations[0]).unwrap();
        let second = fs::read(&report.destinations[1]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), report.bytes);
        assert!(report.destinations[1].ends_with("public/data/discovery.json"));
    }

    #[test]
    fn test_emit_dry_run_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let emitter = Emitter::new(vec![temp_dir.path().join("data")], false);

        let report = emitter.emit(&document()).unwrap();
        assert!(!report.written);
        assert!(!report.destinations[0].exists());
        assert!(!temp_dir.path().join("data").exists());
    }
}
