//! Sheet to document conversion
//!
//! The `Converter` bundles the compiled palette, edge rules and title prefix
//! so one sheet can be turned into a document in a single call.

use anyhow::Result as AnyResult;

use crate::color::Palette;
use crate::config::Config;
use crate::errors::Result;
use crate::section::{EdgeRules, SectionBuilder, SectionDocument};
use crate::sheet::parse_sheet;
use crate::text::TitlePrefix;

#[derive(Debug, Clone, Default)]
pub struct Converter {
    palette: Palette,
    edge_rules: EdgeRules,
    title_prefix: TitlePrefix,
}

impl Converter {
    pub fn new(palette: Palette, edge_rules: EdgeRules, title_prefix: TitlePrefix) -> Self {
        Converter {
            palette,
            edge_rules,
            title_prefix,
        }
    }

    /// Compiles the colour, pattern and prefix settings of a configuration
    pub fn from_config(config: &Config) -> AnyResult<Self> {
        Ok(Converter::new(
            config.palette()?,
            config.edge_rules()?,
            config.title_prefix()?,
        ))
    }

    /// Builds the document for one section from raw CSV bytes
    ///
    /// # Returns
    /// * `Result<Option<SectionDocument>>` - `None` when there is nothing to emit
    ///
    /// # Errors
    /// Returns an error if the CSV cannot be read
    ///
    /// # Examples
    /// ```
    /// use flowchart_data::workflow::Converter;
    ///
    /// let csv = ",Case Flow\n#,Phase,Assigned,Task\n,Review,Alice,Check file\n";
    /// let document = Converter::default()
    ///     .build_section(csv.as_bytes(), "case-opening")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(document.tasks[0].id, "A");
    /// ```
    pub fn build_section(&self, bytes: &[u8], section_id: &str) -> Result<Option<SectionDocument>> {
        let sheet = parse_sheet(bytes, &self.title_prefix)?;
        Ok(SectionBuilder::new(&self.palette, &self.edge_rules).build(section_id, &sheet))
    }
}
