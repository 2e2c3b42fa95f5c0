//! Index building: scanning a pack and aggregating its entity records.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

use chrono::NaiveDate;

use super::frontmatter::read_record;
use super::{is_markdown, is_underscored, EntityRecord, MANIFEST_FILE, ONTOLOGY_FILE};
use crate::context::ServiceContext;

/// Entities not updated for more than this many days are reported as stale.
pub const STALE_AFTER_DAYS: i64 = 90;

/// An entity whose `last_updated` date is older than [`STALE_AFTER_DAYS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleEntry {
    /// Entity identifier.
    pub id: String,
    /// Whole days between `last_updated` and the run date.
    pub days: i64,
}

/// Outcome of scanning a pack directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Entity records in path order.
    pub records: Vec<EntityRecord>,
    /// Markdown files considered that did not yield a record.
    pub skipped: usize,
}

/// Records grouped by kind, with validation and staleness findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackIndex {
    /// Records keyed by kind code, each group in path order.
    pub by_kind: BTreeMap<String, Vec<EntityRecord>>,
    /// Human-readable validation warnings, in path order.
    pub warnings: Vec<String>,
    /// Stale entities, most stale first.
    pub stale: Vec<StaleEntry>,
}

/// Returns `true` if `path` is a document the index should look at.
fn is_candidate(path: &Path) -> bool {
    if !is_markdown(path) || is_underscored(path) {
        return false;
    }
    let name = path.file_name();
    name != Some(OsStr::new(MANIFEST_FILE)) && name != Some(OsStr::new(ONTOLOGY_FILE))
}

/// Scans `pack_dir` recursively for entity records.
///
/// Files are visited in lexicographic path order. Underscore-prefixed files,
/// the manifest, the ontology, and records marked `generated: true` are
/// excluded. Files without a valid record are counted as skipped.
///
/// # Errors
///
/// Returns an error if the pack directory cannot be listed.
pub fn scan_pack(ctx: &ServiceContext, pack_dir: &Path) -> Result<Scan, String> {
    let files = ctx
        .fs
        .list_files(pack_dir)
        .map_err(|e| format!("failed to list {}: {e}", pack_dir.display()))?;

    let mut scan = Scan::default();
    for path in files.iter().filter(|p| is_candidate(p)) {
        match read_record(ctx.fs.as_ref(), path) {
            Some(record) if !record.generated => scan.records.push(record),
            Some(_) => {}
            None => scan.skipped += 1,
        }
    }
    Ok(scan)
}

/// Parses a `last_updated` value as an ISO calendar date.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl PackIndex {
    /// Groups `records` by kind and computes warnings and staleness against
    /// `today`.
    #[must_use]
    pub fn build(records: &[EntityRecord], today: NaiveDate) -> Self {
        let mut index = Self::default();

        for record in records {
            if record.summary.is_none() {
                index
                    .warnings
                    .push(format!("Missing `summary`: {} ({})", record.id, record.file_name()));
            }
            index
                .by_kind
                .entry(record.kind().to_string())
                .or_default()
                .push(record.clone());
        }

        index.stale = records
            .iter()
            .filter_map(|record| {
                let updated = parse_date(record.last_updated.as_deref()?)?;
                let days = (today - updated).num_days();
                (days > STALE_AFTER_DAYS).then(|| StaleEntry {
                    id: record.id.clone(),
                    days,
                })
            })
            .collect();
        index.stale.sort_by(|a, b| b.days.cmp(&a.days));

        index
    }

    /// Total number of records across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }
}

/// All records sorted by identifier, for the flat entity index.
#[must_use]
pub fn entity_list(records: &[EntityRecord]) -> Vec<EntityRecord> {
    let mut list = records.to_vec();
    list.sort_by(|a, b| a.id.cmp(&b.id));
    list
}
