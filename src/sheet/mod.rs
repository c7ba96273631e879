//! Spreadsheet input
//!
//! This module decodes exported CSV bytes, classifies each data row and
//! gathers the title, task rows and banner rows of one sheet.

mod reader;
mod row;

pub use reader::{decode_text, normalize_newlines, parse_sheet, read_rows};
pub use row::{BannerRow, RawRow, RowKind, TaskFields, TaskRow, classify};

/// Everything the section builder needs from one sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    /// Title from the first row, prefix removed. `None` when the sheet has no rows
    pub title: Option<String>,
    /// Task rows in sheet order
    pub tasks: Vec<TaskRow>,
    /// Banner rows in sheet order
    pub banners: Vec<BannerRow>,
}
