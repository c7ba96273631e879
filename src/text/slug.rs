use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("Failed to compile regex pattern for slugify")
});

/// Converts a label into a lowercase, hyphen-separated token
///
/// Every run of characters outside `a-z0-9` collapses into one hyphen and
/// leading or trailing hyphens are removed.
///
/// # Examples
/// ```
/// use flowchart_data::text::slugify;
///
/// assert_eq!(slugify("Client Orientation"), "client-orientation");
/// assert_eq!(slugify("Service of Summons & Complaint"), "service-of-summons-complaint");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
