//! Command dispatch and handlers.

pub mod generate;

use std::env;

use chrono::NaiveDate;

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::pack::index::parse_date;

/// Environment variable that pins the run date when `--today` is absent.
pub const TODAY_ENV: &str = "PACKMAP_TODAY";

/// Dispatch parsed arguments to the generator.
///
/// # Errors
///
/// Returns an error string if the run date is malformed or generation fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = match resolve_run_date(cli.today, env::var(TODAY_ENV).ok())? {
        Some(today) => ServiceContext::live_on(today),
        None => ServiceContext::live(),
    };

    let options = generate::GenerateOptions {
        pack_dir: cli.pack_dir.clone(),
        manifest: cli.manifest,
        verbose: cli.verbose,
    };
    generate::run(&ctx, &options)
}

/// Picks the run date: the flag wins, then a non-empty environment value.
///
/// `None` means "use the system clock".
fn resolve_run_date(
    flag: Option<NaiveDate>,
    env_value: Option<String>,
) -> Result<Option<NaiveDate>, String> {
    if flag.is_some() {
        return Ok(flag);
    }
    let value = env_value.as_deref().map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .ok_or_else(|| format!("invalid {TODAY_ENV} value `{value}`: expected YYYY-MM-DD"))
}
