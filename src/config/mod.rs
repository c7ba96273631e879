//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{load_config, load_or_default, locate_config, parse_config};
pub use model::{Config, SectionSource};
