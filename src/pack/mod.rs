//! Pack model: entity records extracted from a documentation pack.
//!
//! A pack is a directory tree of Markdown documents. Each entity document
//! starts with a YAML frontmatter block carrying at least an `id` of the
//! form `<DOMAIN>.<KIND>.<SEQ>`.

pub mod domain;
pub mod frontmatter;
pub mod index;
pub mod kind;

use std::path::{Path, PathBuf};

/// Manifest file at the pack root; read for domain detection, never indexed.
pub const MANIFEST_FILE: &str = "00-pack-manifest.md";

/// Ontology file at the pack root; never indexed.
pub const ONTOLOGY_FILE: &str = "ontology.md";

/// Directory (relative to the pack root) that receives the navigation map.
pub const MAP_DIR: &str = "07-map";

/// Rendered in place of a missing name, summary, or status.
pub const PLACEHOLDER: &str = "—";

/// Metadata extracted from one entity document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    /// Dotted identifier, e.g. `DP.M.001`. Never empty.
    pub id: String,
    /// Display name, taken from frontmatter or derived from the document.
    pub name: Option<String>,
    /// One-line summary.
    pub summary: Option<String>,
    /// Lifecycle status (`draft`, `stable`, ...).
    pub status: Option<String>,
    /// Raw `last_updated` value; expected as `YYYY-MM-DD`.
    pub last_updated: Option<String>,
    /// Whether the frontmatter carries `generated: true`.
    pub generated: bool,
    /// Source document.
    pub path: PathBuf,
}

impl EntityRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: None,
            summary: None,
            status: None,
            last_updated: None,
            generated: false,
            path: path.into(),
        }
    }

    /// Kind code of this entity (see [`kind::classify_kind`]).
    #[must_use]
    pub fn kind(&self) -> &str {
        kind::classify_kind(&self.id)
    }

    /// Base name of the source document.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Path of the navigation map generated for `domain`.
#[must_use]
pub fn map_output_path(pack_dir: &Path, domain: &str) -> PathBuf {
    pack_dir.join(MAP_DIR).join(format!("{domain}.MAP.001.md"))
}

/// Returns `true` for Markdown documents.
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Returns `true` if the base name of `path` starts with an underscore.
pub(crate) fn is_underscored(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('_'))
}
