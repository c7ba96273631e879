//! Text normalisation
//!
//! This module contains the helpers that turn free spreadsheet text into
//! identifiers, labels, notes and titles.

mod slug;
mod title;
mod truncate;

pub use slug::slugify;
pub use title::TitlePrefix;
pub use truncate::{first_line, truncate, truncate_hard};
