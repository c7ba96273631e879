//! Flowchart data generation
//!
//! Converts process-flow sheets exported as CSV into JSON section documents:
//! ordered task nodes with positional identifiers, category colours and
//! styles, a legend and sequential edges.

pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod errors;
pub mod logging;
pub mod section;
pub mod sheet;
pub mod text;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        csv_parsing_error, file_operation_error, invalid_color_error, pattern_matching_error,
        serialization_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::section::SectionDocument;
    pub use crate::workflow::{Converter, ProcessingOptions, process_sections};
}
