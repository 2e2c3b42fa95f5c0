//! Flat entity index table for the pack manifest.

use super::{cell, optional_cell, row};
use crate::pack::index::entity_list;
use crate::pack::EntityRecord;

/// Renders every record as one row of the `## Entity Index` table, sorted by
/// identifier.
#[must_use]
pub fn render_entity_index(records: &[EntityRecord]) -> String {
    let mut lines = vec![
        "## Entity Index".to_string(),
        String::new(),
        "| ID | Name | Kind | Summary | Status |".to_string(),
        "|----|------|------|---------|--------|".to_string(),
    ];

    for record in entity_list(records) {
        lines.push(row(&[
            cell(&record.id),
            optional_cell(record.name.as_deref()),
            cell(record.kind()),
            optional_cell(record.summary.as_deref()),
            optional_cell(record.status.as_deref()),
        ]));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pack_renders_header_only() {
        assert_eq!(
            render_entity_index(&[]),
            "## Entity Index\n\n| ID | Name | Kind | Summary | Status |\n|----|------|------|---------|--------|"
        );
    }

    #[test]
    fn rows_are_sorted_with_placeholders() {
        let mut method = EntityRecord::new("DP.M.001", "/pack/DP.M.001.md");
        method.name = Some("Knowledge Extraction".into());
        method.summary = Some("Pulls tacit knowledge".into());
        method.status = Some("stable".into());
        let role = EntityRecord::new("DP.R.001", "/pack/DP.R.001.md");
        let odd = EntityRecord::new("DP.X", "/pack/DP.X.md");

        let rendered = render_entity_index(&[role, odd, method]);
        let rows: Vec<&str> = rendered.lines().skip(4).collect();

        assert_eq!(
            rows,
            vec![
                "| DP.M.001 | Knowledge Extraction | M | Pulls tacit knowledge | stable |",
                "| DP.R.001 | — | R | — | — |",
                "| DP.X | — | UNKNOWN | — | — |",
            ]
        );
    }
}
