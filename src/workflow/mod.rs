//! Workflow module
//!
//! This module runs the conversion batch: every configured section is read,
//! built and emitted in turn, and the outcome of each is recorded.

mod context;
mod converter;
mod engine;

pub use context::{SectionOutcome, SkipReason, WorkflowContext, WorkflowStats};
pub use converter::Converter;
pub use engine::{ProcessingOptions, process_sections, run_with_config};
