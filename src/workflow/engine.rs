//! Workflow engine
//!
//! This module contains the engine that runs every configured section
//! through read, build and emit, one after the other.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info};

use crate::config::{Config, SectionSource, load_or_default};
use crate::emitter::Emitter;
use crate::errors::file_operation_error;
use crate::utils::resolve_path;

use super::context::{SectionOutcome, SkipReason, WorkflowContext};
use super::converter::Converter;

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Path to the configuration file, used only if it exists
    pub config_path: PathBuf,
    /// Folder the input and output folders are resolved against
    pub base_dir: PathBuf,
    /// Whether to build documents without writing them
    pub dry_run: bool,
}

/// Processes every section based on the configuration
///
/// 1. Read the configuration, or use the built-in defaults
/// 2. For each section, read its CSV file
/// 3. Build the section document
/// 4. Write the document to every output folder
///
/// A missing, empty or broken section is recorded and skipped; it never
/// stops the remaining sections.
///
/// # Errors
/// Returns an error only if the configuration file is invalid
pub fn process_sections(options: ProcessingOptions) -> Result<WorkflowContext> {
    let config = load_or_default(&options.config_path)?;
    run_with_config(&config, &options.base_dir, options.dry_run)
}

/// Runs the batch for an already loaded configuration
///
/// # Errors
/// Returns an error if the configuration's patterns or colours are invalid
pub fn run_with_config(config: &Config, base_dir: &Path, dry_run: bool) -> Result<WorkflowContext> {
    let converter = Converter::from_config(config)?;
    let input_dir = resolve_path(base_dir, &config.input_dir);
    let output_dirs = config
        .output_dirs
        .iter()
        .map(|dir| resolve_path(base_dir, dir))
        .collect();
    let emitter = Emitter::new(output_dirs, !dry_run);

    info!(
        "Processing {} sections from {}{}...",
        config.sections.len(),
        input_dir.display(),
        if dry_run { " (dry run)" } else { "" }
    );

    let mut context = WorkflowContext::new(dry_run);
    for source in &config.sections {
        let outcome = process_section(source, &input_dir, &converter, &emitter);
        context.record(outcome);
    }

    info!(
        "{} sections emitted, {} skipped",
        context.stats.sections_emitted, context.stats.sections_skipped
    );
    Ok(context)
}

fn process_section(
    source: &SectionSource,
    input_dir: &Path,
    converter: &Converter,
    emitter: &Emitter,
) -> SectionOutcome {
    let path = input_dir.join(&source.file);
    let skipped = |reason: SkipReason| SectionOutcome::Skipped {
        file: source.file.clone(),
        reason,
    };

    if !path.exists() {
        info!("Skipping '{}': {} not found", source.id, path.display());
        return skipped(SkipReason::NotFound);
    }

    debug!("Reading {}", path.display());
    let document = fs::read(&path)
        .map_err(|e| file_operation_error(e, path.clone(), "read"))
        .and_then(|bytes| converter.build_section(&bytes, &source.id));

    let document = match document {
        Ok(Some(document)) => document,
        Ok(None) => {
            info!("Skipping '{}': no title or no tasks", source.id);
            return skipped(SkipReason::Empty);
        }
        Err(e) => {
            error!("Failed to build section '{}': {e}", source.id);
            return skipped(SkipReason::Failed(e.to_string()));
        }
    };

    match emitter.emit(&document) {
        Ok(report) => SectionOutcome::Emitted {
            section_id: document.id.clone(),
            tasks: document.tasks.len(),
            legend: document.legend.len(),
            destinations: report.destinations,
            written: report.written,
        },
        Err(e) => {
            error!("Failed to write section '{}': {e}", source.id);
            skipped(SkipReason::Failed(e.to_string()))
        }
    }
}
