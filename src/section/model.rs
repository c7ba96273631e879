//! Section document structures
//!
//! These types serialise directly into the JSON consumed by the flowchart
//! front end. Optional task fields are left out of the output when absent.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Fill, stroke and text colour of one node style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStyle {
    pub fill: String,
    pub stroke: String,
    pub color: String,
}

/// A style registered under its style key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub key: String,
    pub style: TaskStyle,
}

/// One category shown in the legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// A flowchart node built from one task row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    pub id: String,
    pub label: String,
    pub assigned_to: String,
    pub sla: String,
    pub phase: String,
    pub phase_class: String,
    pub quick_action: String,
    pub style: String,
    /// Always serialised, empty for terminal and last tasks
    pub connects_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_start_node: bool,
}

/// The complete document written for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDocument {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub header_class: String,
    pub theme_color: String,
    pub th_class: String,
    pub section_class: String,
    pub table_columns: Vec<String>,
    pub legend: Vec<LegendEntry>,
    pub tasks: Vec<TaskNode>,
    /// Serialised as an object keyed by style key, in registration order
    #[serde(serialize_with = "serialize_styles_as_map")]
    pub styles: Vec<StyleEntry>,
}

impl SectionDocument {
    pub fn style(&self, key: &str) -> Option<&TaskStyle> {
        self.styles
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.style)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Serialises style entries to a map without reordering them
///
/// This function is used to serialise the styles field of a SectionDocument.
pub fn serialize_styles_as_map<S>(styles: &[StyleEntry], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(styles.len()))?;
    for entry in styles {
        map.serialize_entry(&entry.key, &entry.style)?;
    }
    map.end()
}
