//! Core library entry for the `packmap` CLI.
//!
//! `packmap` reads the YAML frontmatter of every Markdown document in a
//! documentation pack and regenerates two artifacts: the pack's navigation
//! map (`07-map/<DOMAIN>.MAP.001.md`) and a flat entity index table for the
//! pack manifest.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod pack;
pub mod ports;
pub mod render;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or generation fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => return Err(err.to_string()),
        },
    };
    commands::dispatch(&cli)
}
