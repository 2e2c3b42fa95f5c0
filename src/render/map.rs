//! Navigation map document.

use chrono::NaiveDate;

use super::{cell, optional_cell, row};
use crate::pack::index::PackIndex;
use crate::pack::kind::{is_known_kind, kind_label, KNOWN_KINDS};
use crate::pack::EntityRecord;

const ENTITY_TABLE_HEADER: [&str; 2] = [
    "| ID | Name | Summary | Status |",
    "|----|------|---------|--------|",
];

/// Renders the navigation map for `domain` as of `today`.
///
/// The document is a frontmatter header, a statistics table, one table per
/// known kind, a domain-specific section for every other kind, and the
/// warning and staleness sections when they have content. Lines are joined
/// with `\n` and there is no trailing newline.
#[must_use]
pub fn render_map(index: &PackIndex, domain: &str, today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();
    let mut lines: Vec<String> = vec![
        "---".into(),
        format!("id: {domain}.MAP.001"),
        "name: Pack Navigation Map".into(),
        "scope: full-pack".into(),
        format!("created: {today}"),
        format!("last_updated: {today}"),
        "generated: true".into(),
        "---".into(),
        String::new(),
        format!("# [{domain}.MAP.001] Pack Navigation Map"),
        String::new(),
        format!("> Auto-generated from frontmatter on {today}. Do not edit manually."),
        String::new(),
        "---".into(),
        String::new(),
    ];

    push_statistics(&mut lines, index);

    for kind in KNOWN_KINDS {
        let Some(records) = index.by_kind.get(kind) else {
            continue;
        };
        lines.push(format!("## {}", kind_label(kind)));
        lines.push(String::new());
        push_entity_table(&mut lines, records);
    }

    let mut extended = index
        .by_kind
        .iter()
        .filter(|(kind, _)| !is_known_kind(kind))
        .peekable();
    if extended.peek().is_some() {
        lines.push("## Domain-Specific Entities".into());
        lines.push(String::new());
        for (kind, records) in extended {
            lines.push(format!("### {}", kind_label(kind)));
            lines.push(String::new());
            push_entity_table(&mut lines, records);
        }
    }

    if !index.warnings.is_empty() {
        lines.push("## Warnings".into());
        lines.push(String::new());
        lines.extend(index.warnings.iter().map(|w| format!("- {w}")));
        lines.push(String::new());
    }

    if !index.stale.is_empty() {
        lines.push("## Staleness Warnings (>90 days since update)".into());
        lines.push(String::new());
        lines.push("| ID | Days Since Update |".into());
        lines.push("|----|-------------------|".into());
        for entry in &index.stale {
            lines.push(row(&[cell(&entry.id), entry.days.to_string()]));
        }
        lines.push(String::new());
    }

    lines.push("---".into());
    lines.push(String::new());
    lines.push(format!("*Generated by `packmap` on {today}*"));

    lines.join("\n")
}

fn push_statistics(lines: &mut Vec<String>, index: &PackIndex) {
    lines.push("## Statistics".into());
    lines.push(String::new());
    lines.push("| Kind | Count |".into());
    lines.push("|------|-------|".into());
    for (kind, records) in &index.by_kind {
        lines.push(format!("| {} ({kind}) | {} |", kind_label(kind), records.len()));
    }
    lines.push(format!("| **Total** | **{}** |", index.total()));
    lines.push(String::new());
}

fn push_entity_table(lines: &mut Vec<String>, records: &[EntityRecord]) {
    lines.extend(ENTITY_TABLE_HEADER.iter().map(ToString::to_string));

    let mut sorted: Vec<&EntityRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    for record in sorted {
        lines.push(row(&[
            cell(&record.id),
            optional_cell(record.name.as_deref()),
            optional_cell(record.summary.as_deref()),
            optional_cell(record.status.as_deref()),
        ]));
    }
    lines.push(String::new());
}
