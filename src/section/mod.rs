//! Section building
//!
//! This module turns the task rows of one sheet into a linked, styled
//! flowchart document.

mod builder;
mod edges;
mod ids;
mod model;

pub use builder::{SectionBuilder, subtitle};
pub use edges::{EdgeRules, TerminalPattern};
pub use ids::id_from_index;
pub use model::{LegendEntry, SectionDocument, StyleEntry, TaskNode, TaskStyle};
