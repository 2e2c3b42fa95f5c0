//! `packmap <PACK_DIR>`: regenerate the navigation map and print the entity
//! index.

use std::io::Write;
use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::pack::domain::detect_domain;
use crate::pack::index::{scan_pack, PackIndex};
use crate::pack::map_output_path;
use crate::render::entity_index::render_entity_index;
use crate::render::map::render_map;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Pack directory to scan.
    pub pack_dir: PathBuf,
    /// Print a manifest header before the entity index.
    pub manifest: bool,
    /// Print diagnostics to stderr.
    pub verbose: bool,
}

/// Execute a generation run, writing progress and the entity index to stdout.
///
/// # Errors
///
/// Returns an error string if the pack directory is missing, the domain code
/// is unusable, or the map cannot be written.
pub fn run(ctx: &ServiceContext, options: &GenerateOptions) -> Result<(), String> {
    let mut stdout = std::io::stdout().lock();
    run_to(ctx, options, &mut stdout)
}

/// Execute a generation run, writing progress and the entity index to `out`.
///
/// The map is written through `ctx.fs` to `<pack>/07-map/<DOMAIN>.MAP.001.md`,
/// replacing any previous file.
///
/// # Errors
///
/// Returns an error string if the pack directory is missing, the domain code
/// is unusable, the map cannot be written, or `out` fails.
pub fn run_to(
    ctx: &ServiceContext,
    options: &GenerateOptions,
    out: &mut dyn Write,
) -> Result<(), String> {
    if !ctx.fs.is_dir(&options.pack_dir) {
        return Err(format!("Error: {} is not a directory", options.pack_dir.display()));
    }
    let pack_dir = ctx
        .fs
        .canonicalize(&options.pack_dir)
        .map_err(|e| format!("failed to resolve {}: {e}", options.pack_dir.display()))?;
    let today = ctx.clock.today();

    let domain = detect_domain(ctx, &pack_dir);
    if domain.code.is_empty() || domain.code.contains(['/', '\\']) {
        return Err(format!(
            "Error: cannot use domain code `{}` (from {})",
            domain.code, domain.source
        ));
    }
    emit(out, &format!("Domain: {}", domain.code))?;
    emit(out, &format!("Pack directory: {}", pack_dir.display()))?;
    if options.verbose {
        eprintln!("domain {} taken from {}", domain.code, domain.source);
    }

    let scan = scan_pack(ctx, &pack_dir)?;
    let index = PackIndex::build(&scan.records, today);
    if options.verbose {
        eprintln!(
            "{} entities, {} files without frontmatter skipped, {} warnings, {} stale",
            scan.records.len(),
            scan.skipped,
            index.warnings.len(),
            index.stale.len(),
        );
    }

    let map = render_map(&index, &domain.code, today);
    let map_path = map_output_path(&pack_dir, &domain.code);
    ctx.fs
        .write(&map_path, &map)
        .map_err(|e| format!("failed to write map to {}: {e}", map_path.display()))?;
    emit(out, &format!("MAP written to: {}", map_path.display()))?;

    if options.manifest {
        emit(out, "\nEntity Index (for manifest):\n")?;
    }
    emit(out, &render_entity_index(&scan.records))
}

fn emit(out: &mut dyn Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| format!("failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn sample_pack() -> MemoryFileSystem {
        MemoryFileSystem::new()
            .with_file(
                "/packs/digital/00-pack-manifest.md",
                "# Pack\n\n**Pack ID**: `DP`\n",
            )
            .with_file(
                "/packs/digital/01-methods/DP.M.001-knowledge-extraction.md",
                "---\nid: DP.M.001\nsummary: Pull tacit knowledge\nstatus: stable\nlast_updated: 2025-01-01\n---\n# Body\n",
            )
            .with_file(
                "/packs/digital/02-roles/DP.R.001.md",
                "---\nid: DP.R.001\nname: Steward\n---\n",
            )
    }

    fn options(manifest: bool) -> GenerateOptions {
        GenerateOptions {
            pack_dir: PathBuf::from("/packs/digital"),
            manifest,
            verbose: false,
        }
    }

    fn run_captured(ctx: &ServiceContext, options: &GenerateOptions) -> String {
        let mut out = Vec::new();
        run_to(ctx, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_map_and_prints_index() {
        let ctx = ServiceContext::in_memory(today(), sample_pack());
        let stdout = run_captured(&ctx, &options(false));

        assert!(stdout.starts_with(
            "Domain: DP\nPack directory: /packs/digital\nMAP written to: /packs/digital/07-map/DP.MAP.001.md\n## Entity Index\n"
        ));
        assert!(stdout.contains(
            "| DP.M.001 | Knowledge Extraction | M | Pull tacit knowledge | stable |\n| DP.R.001 | Steward | R | — | — |\n"
        ));
        assert!(!stdout.contains("for manifest"));

        let map_path = Path::new("/packs/digital/07-map/DP.MAP.001.md");
        let map = ctx.fs.read_to_string(map_path).unwrap();
        assert!(map.contains(
            "| Methods (M) | 1 |\n| Roles (R) | 1 |\n| **Total** | **2** |"
        ));
        assert!(map.contains("- Missing `summary`: DP.R.001 (DP.R.001.md)"));
        assert!(map.contains("| DP.M.001 | 165 |"));
    }

    #[test]
    fn manifest_flag_adds_header() {
        let ctx = ServiceContext::in_memory(today(), sample_pack());
        let stdout = run_captured(&ctx, &options(true));
        assert!(stdout.contains(
            ".MAP.001.md\n\nEntity Index (for manifest):\n\n## Entity Index\n"
        ));
    }

    #[test]
    fn second_run_reproduces_the_same_map() {
        let ctx = ServiceContext::in_memory(today(), sample_pack());
        let map_path = Path::new("/packs/digital/07-map/DP.MAP.001.md");

        let first_stdout = run_captured(&ctx, &options(false));
        let first = ctx.fs.read_to_string(map_path).unwrap();
        let second_stdout = run_captured(&ctx, &options(false));
        let second = ctx.fs.read_to_string(map_path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_stdout, second_stdout);
    }

    #[test]
    fn empty_pack_still_succeeds() {
        let fs = MemoryFileSystem::new().with_dir("/packs/ops");
        let ctx = ServiceContext::in_memory(today(), fs);
        let options = GenerateOptions {
            pack_dir: PathBuf::from("/packs/ops"),
            manifest: false,
            verbose: false,
        };
        let stdout = run_captured(&ctx, &options);

        assert!(stdout.ends_with(
            "## Entity Index\n\n| ID | Name | Kind | Summary | Status |\n|----|------|------|---------|--------|\n"
        ));
        let map_path = Path::new("/packs/ops/07-map/OP.MAP.001.md");
        let map = ctx.fs.read_to_string(map_path).unwrap();
        assert!(map.contains("| **Total** | **0** |"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let ctx = ServiceContext::in_memory(today(), MemoryFileSystem::new());
        let mut out = Vec::new();
        let err = run_to(&ctx, &options(false), &mut out).unwrap_err();

        assert_eq!(err, "Error: /packs/digital is not a directory");
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_domain_codes_that_escape_the_map_directory() {
        let fs = MemoryFileSystem::new().with_file(
            "/packs/digital/00-pack-manifest.md",
            "---\nid: DP.PACK\npack_id: ../../etc\n---\n",
        );
        let ctx = ServiceContext::in_memory(today(), fs);
        let mut out = Vec::new();

        assert!(run_to(&ctx, &options(false), &mut out).is_err());
    }
}
