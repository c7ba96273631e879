//! Colour engine
//!
//! This module maps category labels and section identifiers to colours and
//! derives the lightened fill colours used for node styles.

mod palette;
mod rgb;

pub use palette::Palette;
pub use rgb::{Rgb, lighten};
