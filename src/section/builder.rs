//! Section assembly
//!
//! This module contains the `SectionBuilder`, which turns parsed task rows
//! into task nodes, tracks the legend and styles in first-seen order, links
//! the nodes and assembles the final document.

use std::collections::HashSet;

use log::debug;

use super::edges::EdgeRules;
use super::ids::id_from_index;
use super::model::{LegendEntry, SectionDocument, StyleEntry, TaskNode, TaskStyle};
use crate::color::{Palette, Rgb};
use crate::constants::{
    DEFAULT_STYLE_KEY, FILL_LIGHTEN_AMOUNT, GENERAL_PHASE, LABEL_MAX_LEN, NOTES_MAX_LEN,
    REMAINDER_MAX_LEN, STYLE_TEXT_COLOR, TABLE_COLUMNS,
};
use crate::sheet::{ParsedSheet, TaskFields};
use crate::text::{first_line, slugify, truncate, truncate_hard};

/// Builds section documents from parsed sheets
#[derive(Debug, Clone, Copy)]
pub struct SectionBuilder<'a> {
    palette: &'a Palette,
    edge_rules: &'a EdgeRules,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(palette: &'a Palette, edge_rules: &'a EdgeRules) -> Self {
        SectionBuilder {
            palette,
            edge_rules,
        }
    }

    /// Builds the document for one section
    ///
    /// # Arguments
    /// * `section_id` - Identifier of the section, also used for the theme colour
    /// * `sheet` - The parsed sheet
    ///
    /// # Returns
    /// * `Option<SectionDocument>` - The document, or `None` when the sheet
    ///   has no title row or no task rows
    pub fn build(&self, section_id: &str, sheet: &ParsedSheet) -> Option<SectionDocument> {
        let title = sheet.title.as_ref()?;
        if sheet.tasks.is_empty() {
            return None;
        }

        let mut legend = LegendTracker::default();
        let mut tasks: Vec<TaskNode> = sheet
            .tasks
            .iter()
            .enumerate()
            .map(|(index, row)| self.task_node(index, &row.fields, &mut legend))
            .collect();

        self.edge_rules.link(&mut tasks);

        if !sheet.banners.is_empty() {
            debug!(
                "Section '{section_id}' has {} banner rows, not used for the graph",
                sheet.banners.len()
            );
        }
        debug!(
            "Built section '{section_id}': {} tasks, {} legend entries, {} styles",
            tasks.len(),
            legend.entries.len(),
            legend.styles.len()
        );

        Some(SectionDocument {
            id: section_id.to_string(),
            title: title.clone(),
            subtitle: subtitle(tasks.len(), &legend.entries),
            header_class: String::new(),
            theme_color: self.palette.theme_for(section_id).to_string(),
            th_class: String::new(),
            section_class: String::new(),
            table_columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            legend: legend.entries,
            tasks,
            styles: legend.styles,
        })
    }

    fn task_node(&self, index: usize, fields: &TaskFields, legend: &mut LegendTracker) -> TaskNode {
        let category = fields.category.as_str();
        let label = truncate_hard(first_line(&fields.task), LABEL_MAX_LEN);

        let color = self.palette.color_for(category);
        let style_key = if category.is_empty() {
            DEFAULT_STYLE_KEY.to_string()
        } else {
            slugify(category)
        };

        if !category.is_empty() {
            legend.record(category, &style_key, color);
        }

        let (phase, phase_class) = if category.is_empty() {
            (GENERAL_PHASE.to_string(), "phase-general".to_string())
        } else {
            (category.to_string(), format!("phase-{}", slugify(category)))
        };

        let notes = compose_notes(&fields.task, &label, &fields.objective);

        TaskNode {
            id: id_from_index(index),
            label,
            assigned_to: fields.assignee.clone(),
            sla: fields.sla.clone(),
            phase,
            phase_class,
            quick_action: category.to_string(),
            style: style_key,
            connects_to: Vec::new(),
            function: non_empty(&fields.function),
            notes: non_empty(&notes),
            is_start_node: index == 0,
        }
    }
}

/// Legend and style entries in order of first appearance
#[derive(Debug, Default)]
struct LegendTracker {
    seen: HashSet<String>,
    entries: Vec<LegendEntry>,
    styles: Vec<StyleEntry>,
}

impl LegendTracker {
    fn record(&mut self, category: &str, style_key: &str, color: Rgb) {
        if !self.seen.insert(category.to_string()) {
            return;
        }

        self.entries.push(LegendEntry {
            label: category.to_string(),
            color: color.to_string(),
        });

        // Distinct categories may share a slug, the first one owns the style
        if self.styles.iter().any(|entry| entry.key == style_key) {
            return;
        }
        self.styles.push(StyleEntry {
            key: style_key.to_string(),
            style: TaskStyle {
                fill: color.lighten(FILL_LIGHTEN_AMOUNT).to_string(),
                stroke: color.to_string(),
                color: STYLE_TEXT_COLOR.to_string(),
            },
        });
    }
}

/// Notes from the objective, led by any extra lines of the task text
fn compose_notes(task: &str, label: &str, objective: &str) -> String {
    let notes = if objective.is_empty() {
        String::new()
    } else {
        truncate(objective, NOTES_MAX_LEN)
    };

    let label_len = label.chars().count();
    if !task.contains('\n') || task.chars().count() <= label_len {
        return notes;
    }

    let remainder: String = task.chars().skip(label_len).collect();
    let remainder = remainder.trim();
    if remainder.is_empty() {
        return notes;
    }

    let lead = truncate(remainder, REMAINDER_MAX_LEN);
    if notes.is_empty() {
        lead
    } else {
        format!("{lead}\n\n{notes}").trim().to_string()
    }
}

/// Subtitle such as `12 tasks — Intake through Review`
pub fn subtitle(task_count: usize, legend: &[LegendEntry]) -> String {
    let mut subtitle = format!("{task_count} tasks");
    match (legend.first(), legend.last()) {
        (Some(first), Some(last)) if first.label != last.label => {
            subtitle.push_str(&format!(" — {} through {}", first.label, last.label));
        }
        (Some(first), _) => subtitle.push_str(&format!(" — {}", first.label)),
        _ => {}
    }
    subtitle
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::TaskRow;

    fn fields(category: &str, assignee: &str, task: &str) -> TaskFields {
        TaskFields {
            category: category.to_string(),
            assignee: assignee.to_string(),
            task: task.to_string(),
            ..TaskFields::default()
        }
    }

    fn sheet(rows: Vec<TaskFields>) -> ParsedSheet {
        ParsedSheet {
            title: Some("Case Flow".to_string()),
            tasks: rows
                .into_iter()
                .enumerate()
                .map(|(i, fields)| TaskRow {
                    row_number: i + 2,
                    fields,
                })
                .collect(),
            banners: Vec::new(),
        }
    }

    fn build(sheet: &ParsedSheet) -> Option<SectionDocument> {
        let palette = Palette::default();
        let rules = EdgeRules::default();
        SectionBuilder::new(&palette, &rules).build("case-opening", sheet)
    }

    #[test]
    fn test_no_document_without_tasks_or_title() {
        assert!(build(&sheet(Vec::new())).is_none());

        let mut untitled = sheet(vec![fields("Review", "Bob", "Check")]);
        untitled.title = None;
        assert!(build(&untitled).is_none());
    }

    #[test]
    fn test_ids_and_start_node() {
        let rows = (0..30)
            .map(|i| fields("Review", "Bob", &format!("Step {i}")))
            .collect();
        let document = build(&sheet(rows)).unwrap();

        assert_eq!(document.tasks[0].id, "A");
        assert_eq!(document.tasks[25].id, "Z");
        assert_eq!(document.tasks[26].id, "AA");
        assert!(document.tasks[0].is_start_node);
        assert!(document.tasks[1..].iter().all(|t| !t.is_start_node));
        assert_eq!(document.tasks[28].connects_to, vec!["AD"]);
        assert!(document.tasks[29].connects_to.is_empty());
    }

    #[test]
    fn test_legend_and_styles_in_first_seen_order() {
        let document = build(&sheet(vec![
            fields("Review", "Bob", "One"),
            fields("Client Orientation", "Alice", "Two"),
            fields("Review", "Bob", "Three"),
            fields("", "Carol", "Four"),
        ]))
        .unwrap();

        let labels: Vec<&str> = document.legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Review", "Client Orientation"]);
        assert_eq!(document.legend[0].color, "#6a1b9a");

        let keys: Vec<&str> = document.styles.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["review", "client-orientation"]);

        let style = document.style("client-orientation").unwrap();
        assert_eq!(style.stroke, "#1565c0");
        assert_eq!(style.fill, "#dbe7f5");
        assert_eq!(style.color, "#222");

        // uncategorised tasks use the default key without registering a style
        assert_eq!(document.tasks[3].style, "default");
        assert!(document.style("default").is_none());
    }

    #[test]
    fn test_shared_slug_keeps_first_style() {
        let document = build(&sheet(vec![
            fields("Follow Up", "Bob", "One"),
            fields("Follow-Up", "Bob", "Two"),
        ]))
        .unwrap();

        assert_eq!(document.legend.len(), 2);
        assert_eq!(document.styles.len(), 1);
        assert_eq!(document.styles[0].style.stroke, "#f9a825");
    }

    #[test]
    fn test_phase_fields() {
        let document = build(&sheet(vec![
            fields("Case Setup", "Bob", "One"),
            fields("", "Bob", "Two"),
        ]))
        .unwrap();

        assert_eq!(document.tasks[0].phase, "Case Setup");
        assert_eq!(document.tasks[0].phase_class, "phase-case-setup");
        assert_eq!(document.tasks[0].quick_action, "Case Setup");
        assert_eq!(document.tasks[1].phase, "General");
        assert_eq!(document.tasks[1].phase_class, "phase-general");
        assert_eq!(document.tasks[1].quick_action, "");
    }

    #[test]
    fn test_long_label_is_cut_hard() {
        let long = "word ".repeat(40);
        let document = build(&sheet(vec![fields("Review", "Bob", long.trim())])).unwrap();
        let label = &document.tasks[0].label;
        assert_eq!(label.chars().count(), 120);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn test_function_and_notes_are_optional() {
        let mut with_extras = fields("Review", "Bob", "Check");
        with_extras.function = "Legal".to_string();
        with_extras.objective = "Make sure the file is complete".to_string();

        let document =
            build(&sheet(vec![with_extras, fields("Review", "Bob", "Next")])).unwrap();
        assert_eq!(document.tasks[0].function.as_deref(), Some("Legal"));
        assert_eq!(
            document.tasks[0].notes.as_deref(),
            Some("Make sure the file is complete")
        );
        assert!(document.tasks[1].function.is_none());
        assert!(document.tasks[1].notes.is_none());
    }

    #[test]
    fn test_compose_notes() {
        assert_eq!(compose_notes("Call", "Call", ""), "");
        assert_eq!(compose_notes("Call", "Call", "  Reach client "), "Reach client");
        assert_eq!(
            compose_notes("Call client\nAttempt 1\nAttempt 2", "Call client", ""),
            "Attempt 1\nAttempt 2"
        );
        assert_eq!(
            compose_notes("Call client\nAttempt 1", "Call client", "Reach client"),
            "Attempt 1\n\nReach client"
        );
        // a trailing blank line carries no remainder
        assert_eq!(compose_notes("Call client\n  ", "Call client", "Why"), "Why");
    }

    #[test]
    fn test_compose_notes_truncates() {
        let objective = "word ".repeat(200);
        let notes = compose_notes("Task", "Task", objective.trim());
        assert!(notes.ends_with("..."));
        assert!(notes.chars().count() <= NOTES_MAX_LEN + 3);

        let task = format!("Task\n{}", "line ".repeat(100));
        let notes = compose_notes(task.trim(), "Task", "");
        assert!(notes.ends_with("..."));
        assert!(notes.chars().count() <= REMAINDER_MAX_LEN + 3);
    }

    #[test]
    fn test_subtitle() {
        let entry = |label: &str| LegendEntry {
            label: label.to_string(),
            color: "#000000".to_string(),
        };
        assert_eq!(subtitle(3, &[]), "3 tasks");
        assert_eq!(subtitle(1, &[entry("Review")]), "1 tasks — Review");
        assert_eq!(
            subtitle(5, &[entry("Intake"), entry("Review"), entry("Filing")]),
            "5 tasks — Intake through Filing"
        );
    }

    #[test]
    fn test_theme_and_columns() {
        let document = build(&sheet(vec![fields("Review", "Bob", "One")])).unwrap();
        assert_eq!(document.theme_color, "#1a237e");
        assert_eq!(document.table_columns.len(), 6);
        assert_eq!(document.table_columns[2], "Quick Action Panel");
        assert_eq!(document.header_class, "");
    }
}
