//! Workflow context
//!
//! This module defines the per-section outcomes and run statistics.

use std::fmt;
use std::path::PathBuf;

use colored::Colorize;

use crate::logging::format_message;

/// Why a section produced no document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The CSV file does not exist
    NotFound,
    /// No title row or no task rows
    Empty,
    /// Reading, parsing or writing failed
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::Empty => write!(f, "empty or no tasks"),
            SkipReason::Failed(message) => write!(f, "error: {message}"),
        }
    }
}

/// What happened to one configured section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The document was built and written (or would be, in a dry run)
    Emitted {
        section_id: String,
        tasks: usize,
        legend: usize,
        destinations: Vec<PathBuf>,
        written: bool,
    },
    /// No document for this section
    Skipped { file: String, reason: SkipReason },
}

impl SectionOutcome {
    fn tag(&self) -> &'static str {
        match self {
            SectionOutcome::Emitted { written: true, .. } => "OK",
            SectionOutcome::Emitted { written: false, .. } => "DRY",
            SectionOutcome::Skipped { .. } => "SKIP",
        }
    }

    fn detail(&self) -> String {
        match self {
            SectionOutcome::Emitted {
                section_id,
                tasks,
                legend,
                ..
            } => format!("{section_id}.json  ({tasks} tasks, {legend} phases)"),
            SectionOutcome::Skipped { file, reason } => format!("{file} ({reason})"),
        }
    }

    /// Console line such as `  OK    discovery.json  (12 tasks, 4 phases)`
    pub fn status_line(&self) -> String {
        format!("  {:<6}{}", self.tag(), self.detail())
    }

    /// Same as [`status_line`](Self::status_line), tag coloured on a terminal
    pub fn display_line(&self) -> String {
        let padded = format!("{:<6}", self.tag());
        let padded = padded.as_str();
        let colored = match self {
            SectionOutcome::Emitted { written: true, .. } => padded.green().bold(),
            SectionOutcome::Emitted { written: false, .. } => padded.cyan(),
            SectionOutcome::Skipped {
                reason: SkipReason::Failed(_),
                ..
            } => padded.red(),
            SectionOutcome::Skipped { .. } => padded.yellow(),
        };
        format_message(
            &self.status_line(),
            &format!("  {}{}", colored, self.detail()),
        )
    }
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    pub sections_processed: usize,
    pub sections_emitted: usize,
    pub sections_skipped: usize,
    pub tasks_emitted: usize,
    pub errors: usize,
}

/// State collected over one run
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Whether files were only simulated
    pub dry_run: bool,
    pub stats: WorkflowStats,
    /// Outcomes in section order
    pub outcomes: Vec<SectionOutcome>,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            ..WorkflowContext::default()
        }
    }

    /// Stores an outcome and updates the statistics
    pub fn record(&mut self, outcome: SectionOutcome) {
        self.stats.sections_processed += 1;
        match &outcome {
            SectionOutcome::Emitted { tasks, .. } => {
                self.stats.sections_emitted += 1;
                self.stats.tasks_emitted += tasks;
            }
            SectionOutcome::Skipped { reason, .. } => {
                self.stats.sections_skipped += 1;
                if matches!(reason, SkipReason::Failed(_)) {
                    self.stats.errors += 1;
                }
            }
        }
        self.outcomes.push(outcome);
    }
}
