//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Top-level CLI parser for `packmap`.
#[derive(Debug, Parser)]
#[command(
    name = "packmap",
    version,
    about = "Generate the navigation map and entity index of a documentation pack"
)]
pub struct Cli {
    /// Pack directory to scan.
    pub pack_dir: PathBuf,
    /// Introduce the printed entity index with a header for the manifest.
    #[arg(long)]
    pub manifest: bool,
    /// Run date used for staleness and generated-on notices
    /// (defaults to `PACKMAP_TODAY`, then the current date).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
    /// Print diagnostics (domain source, skipped files) to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
