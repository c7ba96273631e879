use regex::Regex;

use crate::constants::DEFAULT_TITLE_PREFIX;
use crate::errors::{Result, pattern_matching_error};

/// Organisational prefix removed from sheet titles
#[derive(Debug, Clone)]
pub struct TitlePrefix {
    pattern: Regex,
}

impl TitlePrefix {
    /// Compiles a prefix pattern
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| pattern_matching_error(e, pattern))?;
        Ok(TitlePrefix { pattern })
    }

    /// Removes the first prefix match and trims the rest
    pub fn strip(&self, title: &str) -> String {
        self.pattern.replace(title.trim(), "").trim().to_string()
    }
}

impl Default for TitlePrefix {
    fn default() -> Self {
        TitlePrefix {
            pattern: Regex::new(DEFAULT_TITLE_PREFIX)
                .expect("Failed to compile regex pattern for DEFAULT_TITLE_PREFIX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_default_prefix() {
        let prefix = TitlePrefix::default();
        assert_eq!(prefix.strip("BJB: Case Opening"), "Case Opening");
        assert_eq!(prefix.strip("BJB: LIT / Discovery"), "Discovery");
        assert_eq!(prefix.strip("BJB:LIT/Expert & Deposition "), "Expert & Deposition");
        assert_eq!(prefix.strip("  Case Flow  "), "Case Flow");
    }

    #[test]
    fn test_strip_is_case_sensitive_and_anchored() {
        let prefix = TitlePrefix::default();
        assert_eq!(prefix.strip("bjb: Case Opening"), "bjb: Case Opening");
        assert_eq!(prefix.strip("Intro BJB: Case"), "Intro BJB: Case");
    }

    #[test]
    fn test_custom_prefix() {
        let prefix = TitlePrefix::new(r"^ACME\s*-\s*").unwrap();
        assert_eq!(prefix.strip("ACME - Intake"), "Intake");
        assert!(TitlePrefix::new("(").is_err());
    }
}
