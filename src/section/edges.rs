//! Edge inference
//!
//! Tasks form a single chain in sheet order. A task whose label matches a
//! terminal pattern ends the chain at that point and has no outgoing edge.

use log::debug;
use regex::{Regex, RegexBuilder};

use super::model::TaskNode;
use crate::constants::DEFAULT_TERMINAL_PATTERNS;
use crate::errors::{Result, pattern_matching_error};

/// A case-insensitive phrase marking a task as terminal
#[derive(Debug, Clone)]
pub struct TerminalPattern {
    source: String,
    regex: Regex,
}

impl TerminalPattern {
    /// Compiles a terminal phrase
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| pattern_matching_error(e, pattern))?;

        Ok(TerminalPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, label: &str) -> bool {
        self.regex.is_match(label)
    }
}

/// Rules used to connect the tasks of a section
#[derive(Debug, Clone)]
pub struct EdgeRules {
    terminal: Vec<TerminalPattern>,
}

impl EdgeRules {
    /// Compiles the terminal patterns, keeping their order
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regex
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terminal = patterns
            .into_iter()
            .map(|pattern| TerminalPattern::new(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(EdgeRules { terminal })
    }

    /// First terminal pattern matching the label, if any
    pub fn terminal_match(&self, label: &str) -> Option<&TerminalPattern> {
        self.terminal.iter().find(|pattern| pattern.is_match(label))
    }

    pub fn is_terminal(&self, label: &str) -> bool {
        self.terminal_match(label).is_some()
    }

    /// Fills in `connects_to` for every task
    ///
    /// Terminal tasks and the last task get no edges; every other task
    /// points at the task right after it.
    pub fn link(&self, tasks: &mut [TaskNode]) {
        for index in 0..tasks.len() {
            let target = match self.terminal_match(&tasks[index].label) {
                Some(pattern) => {
                    debug!(
                        "Task {} is terminal (matched '{}')",
                        tasks[index].id,
                        pattern.as_str()
                    );
                    None
                }
                None => tasks.get(index + 1).map(|next| next.id.clone()),
            };

            tasks[index].connects_to = target.into_iter().collect();
        }
    }
}

impl Default for EdgeRules {
    fn default() -> Self {
        EdgeRules::new(DEFAULT_TERMINAL_PATTERNS)
            .expect("Failed to compile regex patterns for DEFAULT_TERMINAL_PATTERNS")
    }
}
