//! Category and section palettes
//!
//! The built-in tables are initialised once and never mutated. A `Palette`
//! copies them and layers configured overrides on top.

use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;

use super::rgb::Rgb;
use crate::constants::{FALLBACK_CATEGORY_COLOR, FALLBACK_THEME_COLOR};
use crate::errors::Result;

static CATEGORY_COLORS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        // Case opening
        ("Client Orientation", 0x1565c0),
        ("Case Setup", 0x1a237e),
        ("Automated Doc Request", 0x2e7d32),
        ("Doc Request", 0xe65100),
        ("Review", 0x6a1b9a),
        ("Doc Production", 0xe65100),
        ("Approval", 0x6a1b9a),
        ("Filing", 0xc62828),
        ("Service of Summons & Complaint", 0x00838f),
        ("Court Notice", 0x37474f),
        ("Follow Up", 0xf9a825),
        ("Supportive Doc Production", 0xad1457),
        ("Court Filing Notice", 0x37474f),
        // Treatment monitoring
        ("Treatment Monitoring or Client Communication", 0x00695c),
        (
            "Treatment Monitoring or Client Communication Appointment",
            0x00695c,
        ),
        ("Liens Audit", 0x4e342e),
        ("Updated medical bills", 0xe65100),
        ("Amending Discovery Responses", 0x0d47a1),
        ("Supportive Administrative Taks", 0x546e7a),
        // Discovery
        ("Discovery", 0x0d47a1),
        ("Client Discovery Appt", 0x0d47a1),
        ("Management Escalation", 0xc62828),
        ("Discovery Appointment", 0x0d47a1),
        // Expert & deposition
        ("Assign non party deposition procedure", 0x37474f),
        ("Retaining Expert", 0x4e342e),
        ("Expert Report Review", 0x4e342e),
        ("Amended Expert Report", 0x4e342e),
        ("Amended Expert Report Review", 0x4e342e),
        ("Client Deposition", 0x00838f),
        ("System Automation", 0x2e7d32),
        // Arbitration / mediation
        ("Client Notice", 0x37474f),
        ("Case Prep", 0x5d4037),
        ("Court Filing", 0xc62828),
        ("Calendar", 0x546e7a),
        ("Automation", 0x546e7a),
        ("Preparartion", 0x5d4037),
        ("Preparation", 0x5d4037),
        ("Documentation", 0x0d47a1),
    ])
});

static THEME_COLORS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("case-opening", 0x1a237e),
        ("treatment-monitoring", 0x00695c),
        ("discovery", 0x0d47a1),
        ("expert-deposition", 0x4e342e),
        ("arbitration-mediation", 0x5d4037),
    ])
});

/// Colour lookup tables used while building sections
#[derive(Debug, Clone)]
pub struct Palette {
    categories: HashMap<String, Rgb>,
    themes: HashMap<String, Rgb>,
    fallback_category: Rgb,
    fallback_theme: Rgb,
}

impl Palette {
    /// Creates a palette from the built-in tables merged with overrides
    ///
    /// # Arguments
    /// * `category_overrides` - Extra or replacement category colours
    /// * `theme_overrides` - Extra or replacement section theme colours
    ///
    /// # Errors
    /// Returns an error if any colour is not a `#RRGGBB` value
    pub fn with_overrides(
        category_overrides: &HashMap<String, String>,
        theme_overrides: &HashMap<String, String>,
    ) -> Result<Self> {
        Ok(Palette {
            categories: merge_table(&CATEGORY_COLORS, category_overrides)?,
            themes: merge_table(&THEME_COLORS, theme_overrides)?,
            ..Palette::default()
        })
    }

    /// Base colour for a category, or the neutral fallback
    pub fn color_for(&self, category: &str) -> Rgb {
        match self.categories.get(category) {
            Some(color) => *color,
            None => {
                trace!("No colour for category '{category}', using fallback");
                self.fallback_category
            }
        }
    }

    /// Theme colour for a section, or the default theme
    pub fn theme_for(&self, section_id: &str) -> Rgb {
        self.themes
            .get(section_id)
            .copied()
            .unwrap_or(self.fallback_theme)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            categories: builtin_table(&CATEGORY_COLORS),
            themes: builtin_table(&THEME_COLORS),
            fallback_category: Rgb::from_hex(FALLBACK_CATEGORY_COLOR),
            fallback_theme: Rgb::from_hex(FALLBACK_THEME_COLOR),
        }
    }
}

fn builtin_table(defaults: &HashMap<&'static str, u32>) -> HashMap<String, Rgb> {
    defaults
        .iter()
        .map(|(key, value)| (key.to_string(), Rgb::from_hex(*value)))
        .collect()
}

fn merge_table(
    defaults: &HashMap<&'static str, u32>,
    overrides: &HashMap<String, String>,
) -> Result<HashMap<String, Rgb>> {
    let mut table = builtin_table(defaults);
    for (key, value) in overrides {
        table.insert(key.clone(), value.parse()?);
    }
    Ok(table)
}
