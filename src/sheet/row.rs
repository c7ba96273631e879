//! Row classification
//!
//! Rows are positional: cell 1 holds the category, cell 2 the assignee,
//! cell 3 the task text, cell 4 the objective, cell 5 the function and
//! cell 6 the SLA. Everything past the positional access in this module
//! works on named fields.

const CATEGORY: usize = 1;
const ASSIGNEE: usize = 2;
const TASK: usize = 3;
const OBJECTIVE: usize = 4;
const FUNCTION: usize = 5;
const SLA: usize = 6;

/// Rows shorter than this are never banners or tasks
const MIN_CELLS: usize = 4;

/// One CSV record, cells as read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        RawRow { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Trimmed cell content, empty when the cell is missing
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(|c| c.trim()).unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RawRow::new(iter.into_iter().map(Into::into).collect())
    }
}

/// What a data row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Section header: category only
    Banner,
    /// Assigned task
    Task,
    /// Anything else
    Skipped,
}

/// Classifies a data row by its category, assignee and task cells
///
/// # Examples
/// ```
/// use flowchart_data::sheet::{RawRow, RowKind, classify};
///
/// let row: RawRow = ["", "Review", "Alice", "Check file"].into_iter().collect();
/// assert_eq!(classify(&row), RowKind::Task);
/// ```
pub fn classify(row: &RawRow) -> RowKind {
    if row.len() < MIN_CELLS {
        return RowKind::Skipped;
    }

    let has_category = !row.cell(CATEGORY).is_empty();
    let has_assignee = !row.cell(ASSIGNEE).is_empty();
    let has_task = !row.cell(TASK).is_empty();

    match (has_category, has_assignee, has_task) {
        (_, true, true) => RowKind::Task,
        (true, false, false) => RowKind::Banner,
        _ => RowKind::Skipped,
    }
}

/// Named view of a task row, missing cells read as empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub category: String,
    pub assignee: String,
    pub task: String,
    pub objective: String,
    pub function: String,
    pub sla: String,
}

impl From<&RawRow> for TaskFields {
    fn from(row: &RawRow) -> Self {
        TaskFields {
            category: row.cell(CATEGORY).to_string(),
            assignee: row.cell(ASSIGNEE).to_string(),
            task: row.cell(TASK).to_string(),
            objective: row.cell(OBJECTIVE).to_string(),
            function: row.cell(FUNCTION).to_string(),
            sla: row.cell(SLA).to_string(),
        }
    }
}

/// A task row together with its position in the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Zero-based record number in the CSV
    pub row_number: usize,
    pub fields: TaskFields,
}

/// A section header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRow {
    /// Zero-based record number in the CSV
    pub row_number: usize,
    pub label: String,
}

impl BannerRow {
    pub fn from_row(row_number: usize, row: &RawRow) -> Self {
        BannerRow {
            row_number,
            label: row.cell(CATEGORY).to_string(),
        }
    }
}
