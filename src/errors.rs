use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the flowchart conversion library
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error while reading CSV records
    CsvParsing { source: csv::Error, detail: String },
    /// Error related to pattern compilation
    PatternMatching { source: RegexError, pattern: String },
    /// Error when a colour is not a `#RRGGBB` value
    InvalidColor { value: String },
    /// Error while serialising a section document
    Serialization {
        source: serde_json::Error,
        section: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::CsvParsing { source, detail } => {
                write!(f, "Failed to parse CSV {detail}: {source}")
            }
            Error::PatternMatching { pattern, .. } => {
                write!(f, "Invalid pattern: {pattern}")
            }
            Error::InvalidColor { value } => {
                write!(f, "Invalid colour '{value}', expected #RRGGBB")
            }
            Error::Serialization { section, .. } => {
                write!(f, "Failed to serialise section '{section}'")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::CsvParsing { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            Error::Serialization { source, .. } => Some(source),
            Error::InvalidColor { .. } => None,
        }
    }
}

/// Custom Result type for the flowchart conversion library
///
/// # Examples
/// ```
/// use flowchart_data::prelude::{Result, invalid_color_error};
///
/// fn check_color(value: &str) -> Result<&str> {
///     if value.starts_with('#') {
///         Ok(value)
///     } else {
///         Err(invalid_color_error(value))
///     }
/// }
///
/// assert!(check_color("#1565c0").is_ok());
/// assert!(check_color("blue").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a CSV parsing error
pub fn csv_parsing_error(err: csv::Error, detail: &str) -> Error {
    Error::CsvParsing {
        source: err,
        detail: detail.to_string(),
    }
}

/// Helper function to create a pattern matching error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an invalid colour error
pub fn invalid_color_error(value: &str) -> Error {
    Error::InvalidColor {
        value: value.to_string(),
    }
}

/// Helper function to create a serialisation error
pub fn serialization_error(err: serde_json::Error, section: &str) -> Error {
    Error::Serialization {
        source: err,
        section: section.to_string(),
    }
}
