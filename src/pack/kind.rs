//! Entity kind classification.

/// Kind code used for identifiers with fewer than three segments.
pub const UNKNOWN_KIND: &str = "UNKNOWN";

/// Kinds with a dedicated map section, in the order they are rendered.
pub const KNOWN_KINDS: [&str; 7] = ["D", "R", "M", "WP", "FM", "SOTA", "MAP"];

const KIND_LABELS: [(&str, &str); 9] = [
    ("D", "Distinctions"),
    ("R", "Roles"),
    ("M", "Methods"),
    ("WP", "Work Products"),
    ("FM", "Failure Modes"),
    ("SOTA", "SoTA Annotations"),
    ("MAP", "Maps"),
    ("CHR", "Characteristics"),
    ("OA", "Objects of Attention"),
];

/// Extracts the kind code from an entity identifier.
///
/// `DP.M.001` classifies as `M`; identifiers with fewer than three
/// dot-separated segments classify as [`UNKNOWN_KIND`].
#[must_use]
pub fn classify_kind(id: &str) -> &str {
    let mut parts = id.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(kind), Some(_)) => kind,
        _ => UNKNOWN_KIND,
    }
}

/// Human-readable label for a kind code; unrecognized codes label themselves.
#[must_use]
pub fn kind_label(code: &str) -> &str {
    KIND_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, label)| *label)
}

/// Returns `true` if the kind has its own top-level map section.
#[must_use]
pub fn is_known_kind(code: &str) -> bool {
    KNOWN_KINDS.contains(&code)
}
