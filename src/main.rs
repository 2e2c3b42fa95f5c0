//! Binary entrypoint for the `packmap` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A `.env` in the working directory may pin PACKMAP_TODAY.
    let _ = dotenvy::dotenv();
    match packmap::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
