//! CSV decoding
//!
//! This module turns raw file bytes into rows and splits them into the
//! title, task rows and banner rows.

use std::borrow::Cow;

use csv::ReaderBuilder;
use encoding_rs::UTF_8;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ParsedSheet;
use super::row::{BannerRow, RawRow, RowKind, TaskFields, TaskRow, classify};
use crate::errors::{Result, csv_parsing_error};
use crate::text::TitlePrefix;

/// Record holding the title in cell 1
const TITLE_ROW: usize = 0;
/// First record after the header row
const FIRST_DATA_ROW: usize = 2;
const TITLE_CELL: usize = 1;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n?").expect("Failed to compile regex pattern for line breaks"));

/// Decodes UTF-8 bytes, dropping a leading byte-order mark
///
/// Malformed sequences are replaced rather than rejected.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        warn!("Input contains invalid UTF-8, replaced malformed sequences");
    }
    text
}

/// Turns `\r\n` and lone `\r` line breaks into `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(text, "\n")
}

/// Reads every CSV record of a text
///
/// Quoted cells may span lines. Records may have any number of cells.
/// Each blank line becomes an empty row, so row positions follow the
/// lines of the file. Expects `\n` line breaks.
///
/// # Errors
/// Returns an error if a record cannot be read
pub fn read_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_parsing_error(e, &format!("record {index}")))?;

        // the reader skips blank lines, they sit between its start and the record
        let start = record
            .position()
            .map_or(0, |position| position.byte() as usize)
            .min(text.len());
        let blank_lines = text.as_bytes()[start..]
            .iter()
            .take_while(|&&byte| byte == b'\n')
            .count();
        rows.extend(std::iter::repeat_with(RawRow::default).take(blank_lines));

        rows.push(record.iter().collect::<RawRow>());
    }

    Ok(rows)
}

/// Parses one exported sheet
///
/// Row 0 carries the title, row 1 the column headers and every later row
/// is classified as a banner, a task or skipped.
///
/// # Arguments
/// * `bytes` - The raw file content
/// * `prefix` - Prefix removed from the title
///
/// # Errors
/// Returns an error if the CSV cannot be read
pub fn parse_sheet(bytes: &[u8], prefix: &TitlePrefix) -> Result<ParsedSheet> {
    let text = decode_text(bytes);
    let text = normalize_newlines(&text);
    let rows = read_rows(&text)?;

    let Some(title_row) = rows.get(TITLE_ROW) else {
        debug!("Sheet has no rows");
        return Ok(ParsedSheet::default());
    };
    let title = prefix.strip(title_row.cell(TITLE_CELL));

    let mut sheet = ParsedSheet {
        title: Some(title),
        ..ParsedSheet::default()
    };

    for (row_number, row) in rows.iter().enumerate().skip(FIRST_DATA_ROW) {
        match classify(row) {
            RowKind::Task => sheet.tasks.push(TaskRow {
                row_number,
                fields: TaskFields::from(row),
            }),
            RowKind::Banner => sheet.banners.push(BannerRow::from_row(row_number, row)),
            RowKind::Skipped => trace!("Skipping row {row_number}"),
        }
    }

    debug!(
        "Parsed {} rows: {} tasks, {} banners",
        rows.len(),
        sheet.tasks.len(),
        sheet.banners.len()
    );

    Ok(sheet)
}
