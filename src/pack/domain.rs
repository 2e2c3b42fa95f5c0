//! Domain code detection.
//!
//! The domain code (`DP`, `SEC`, ...) names the generated map and prefixes
//! entity identifiers. It is resolved by trying, in order: the manifest's
//! `pack_id` frontmatter field, a `Pack ID` line in the manifest prose, the
//! prefix of the first entity identifier, and finally the directory name.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::frontmatter::{entity_id, parse_mapping, read_record};
use super::{is_markdown, is_underscored, MANIFEST_FILE};
use crate::context::ServiceContext;

static PACK_ID_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Pack ID[*]*:\s*`?([A-Z]{2,4})`?").ok());

/// Where a detected domain code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSource {
    /// `pack_id` in the manifest frontmatter.
    ManifestFrontmatter,
    /// A `Pack ID: XX` line in the manifest text.
    ManifestProse,
    /// First segment of the first entity identifier found in the pack.
    EntityPrefix,
    /// First two letters of the pack directory name.
    DirectoryName,
}

impl std::fmt::Display for DomainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::ManifestFrontmatter => "manifest frontmatter",
            Self::ManifestProse => "manifest Pack ID line",
            Self::EntityPrefix => "first entity identifier",
            Self::DirectoryName => "directory name",
        };
        f.write_str(text)
    }
}

/// A detected domain code and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The domain code.
    pub code: String,
    /// Which strategy produced it.
    pub source: DomainSource,
}

/// Everything the detection strategies may look at.
pub struct DetectionContext<'a> {
    /// Pack root.
    pub pack_dir: &'a Path,
    /// Raw manifest text, if the manifest exists and is readable.
    pub manifest: Option<String>,
    ctx: &'a ServiceContext,
}

impl<'a> DetectionContext<'a> {
    /// Loads the manifest (if any) for the pack rooted at `pack_dir`.
    #[must_use]
    pub fn load(ctx: &'a ServiceContext, pack_dir: &'a Path) -> Self {
        let manifest_path = pack_dir.join(MANIFEST_FILE);
        let manifest = if ctx.fs.exists(&manifest_path) {
            ctx.fs.read_to_string(&manifest_path).ok()
        } else {
            None
        };
        Self {
            pack_dir,
            manifest,
            ctx,
        }
    }

    fn candidate_documents(&self) -> Vec<PathBuf> {
        let Ok(files) = self.ctx.fs.list_files(self.pack_dir) else {
            return Vec::new();
        };
        files
            .into_iter()
            .filter(|path| is_markdown(path) && !is_underscored(path))
            .filter(|path| path.file_name() != Some(OsStr::new(MANIFEST_FILE)))
            .collect()
    }
}

/// A single detection strategy.
type Strategy = fn(&DetectionContext<'_>) -> Option<String>;

/// Strategies in precedence order.
const STRATEGIES: [(DomainSource, Strategy); 4] = [
    (DomainSource::ManifestFrontmatter, from_manifest_frontmatter),
    (DomainSource::ManifestProse, from_manifest_prose),
    (DomainSource::EntityPrefix, from_entity_prefix),
    (DomainSource::DirectoryName, from_directory_name),
];

/// Manifest frontmatter fields relevant to detection.
#[derive(Debug, Default, Deserialize)]
struct ManifestFrontmatter {
    #[serde(default)]
    pack_id: Option<String>,
}

/// `pack_id` from the manifest frontmatter.
///
/// Like any other frontmatter block, the manifest's only counts when it
/// carries a non-empty `id`.
#[must_use]
pub fn from_manifest_frontmatter(dc: &DetectionContext<'_>) -> Option<String> {
    let mapping = parse_mapping(dc.manifest.as_deref()?)?;
    entity_id(&mapping)?;
    let value = serde_yaml::Value::Mapping(mapping);
    let fields: ManifestFrontmatter = serde_yaml::from_value(value).ok()?;
    fields.pack_id.filter(|id| !id.trim().is_empty())
}

/// `**Pack ID**: `XX`` style line anywhere in the manifest text.
#[must_use]
pub fn from_manifest_prose(dc: &DetectionContext<'_>) -> Option<String> {
    let manifest = dc.manifest.as_deref()?;
    PACK_ID_LINE
        .as_ref()?
        .captures(manifest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First segment of the first parseable entity identifier, in path order.
#[must_use]
pub fn from_entity_prefix(dc: &DetectionContext<'_>) -> Option<String> {
    dc.candidate_documents().iter().find_map(|path| {
        let record = read_record(dc.ctx.fs.as_ref(), path)?;
        record.id.split_once('.').map(|(prefix, _)| prefix.to_string())
    })
}

/// Upper-cased first two characters of the pack directory name.
#[must_use]
pub fn from_directory_name(dc: &DetectionContext<'_>) -> Option<String> {
    let name = dc
        .pack_dir
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    Some(name.to_uppercase().chars().take(2).collect())
}

/// Detects the domain code of the pack rooted at `pack_dir`.
#[must_use]
pub fn detect_domain(ctx: &ServiceContext, pack_dir: &Path) -> Detection {
    let dc = DetectionContext::load(ctx, pack_dir);
    STRATEGIES
        .iter()
        .find_map(|(source, strategy)| {
            strategy(&dc).map(|code| Detection {
                code,
                source: *source,
            })
        })
        .unwrap_or_else(|| Detection {
            code: String::new(),
            source: DomainSource::DirectoryName,
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn context(fs: MemoryFileSystem) -> ServiceContext {
        ServiceContext::in_memory(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), fs)
    }

    #[test]
    fn prefers_manifest_frontmatter() {
        let ctx = context(
            MemoryFileSystem::new()
                .with_file(
                    "/packs/digital/00-pack-manifest.md",
                    "---\nid: SEC.MANIFEST\npack_id: SEC\n---\n**Pack ID**: `DP`\n",
                )
                .with_file("/packs/digital/01/XX.M.001.md", "---\nid: XX.M.001\n---\n"),
        );

        let detection = detect_domain(&ctx, Path::new("/packs/digital"));
        assert_eq!(detection.code, "SEC");
        assert_eq!(detection.source, DomainSource::ManifestFrontmatter);
    }

    #[test]
    fn manifest_pack_id_is_ignored_without_an_id() {
        let ctx = context(
            MemoryFileSystem::new()
                .with_file(
                    "/packs/digital/00-pack-manifest.md",
                    "---\npack_id: OPS\n---\n",
                )
                .with_file("/packs/digital/01/DP.M.001.md", "---\nid: DP.M.001\n---\n"),
        );

        let detection = detect_domain(&ctx, Path::new("/packs/digital"));
        assert_eq!(detection.code, "DP");
        assert_eq!(detection.source, DomainSource::EntityPrefix);
    }

    #[test]
    fn pattern_compiles() {
        assert!(PACK_ID_LINE.is_some());
    }

    #[test]
    fn falls_back_to_pack_id_prose() {
        let fs = MemoryFileSystem::new().with_file(
            "/packs/digital/00-pack-manifest.md",
            "# Digital Platform Pack\n\n**Pack ID**: `DP`\n",
        );
        let ctx = context(fs);

        let detection = detect_domain(&ctx, Path::new("/packs/digital"));
        assert_eq!(detection.code, "DP");
        assert_eq!(detection.source, DomainSource::ManifestProse);
    }

    #[test]
    fn prose_accepts_unquoted_code() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/00-pack-manifest.md", "---\nid: x\n---\nPack ID: SECU\n");
        let ctx = context(fs);
        let dc = DetectionContext::load(&ctx, Path::new("/p"));
        assert_eq!(from_manifest_frontmatter(&dc), None);
        assert_eq!(from_manifest_prose(&dc).as_deref(), Some("SECU"));
    }

    #[test]
    fn falls_back_to_first_entity_prefix() {
        let ctx = context(
            MemoryFileSystem::new()
                .with_file("/packs/digital/00-pack-manifest.md", "# No pack id here\n")
                .with_file(
                    "/packs/digital/01-methods/_template.md",
                    "---\nid: TPL.M.000\n---\n",
                )
                .with_file("/packs/digital/01-methods/notes.md", "no frontmatter\n")
                .with_file(
                    "/packs/digital/01-methods/DP.M.001.md",
                    "---\nid: DP.M.001\n---\n",
                )
                .with_file(
                    "/packs/digital/02-roles/ZZ.R.001.md",
                    "---\nid: ZZ.R.001\n---\n",
                ),
        );

        let detection = detect_domain(&ctx, Path::new("/packs/digital"));
        assert_eq!(detection.code, "DP");
        assert_eq!(detection.source, DomainSource::EntityPrefix);
    }

    #[test]
    fn entity_prefix_skips_identifiers_without_dots() {
        let ctx = context(
            MemoryFileSystem::new()
                .with_file("/p/a.md", "---\nid: LONELY\n---\n")
                .with_file("/p/b.md", "---\nid: QA.R.002\n---\n"),
        );
        let dc = DetectionContext::load(&ctx, Path::new("/p"));
        assert_eq!(from_entity_prefix(&dc).as_deref(), Some("QA"));
    }

    #[test]
    fn falls_back_to_directory_name() {
        let fs = MemoryFileSystem::new()
            .with_file("/packs/digital/readme.md", "nothing to see\n");
        let ctx = context(fs);

        let detection = detect_domain(&ctx, Path::new("/packs/digital"));
        assert_eq!(detection.code, "DI");
        assert_eq!(detection.source, DomainSource::DirectoryName);
    }

    #[test]
    fn directory_name_shorter_than_two_characters() {
        let ctx = context(MemoryFileSystem::new().with_dir("/packs/x"));
        assert_eq!(detect_domain(&ctx, Path::new("/packs/x")).code, "X");
    }
}
